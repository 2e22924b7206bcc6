//! The embedded 2026 KSE-100 broker compilation, transcribed from the
//! published reports. Loaded once at startup and never mutated.

use crate::models::{Broker, Figure, Horizon, Recommendation, SignalDraft};

fn broker(name: &str, index_target: &str, recommendations: Vec<Recommendation>) -> Broker {
    Broker {
        name: name.to_string(),
        index_target: index_target.to_string(),
        recommendations,
    }
}

/// Target price only.
fn call(stock: &str, tp: f64) -> Recommendation {
    Recommendation {
        stock: stock.to_string(),
        tp: Some(Figure::Number(tp)),
        price: None,
        upside: None,
    }
}

/// Target price with the upside as printed (percent string).
fn call_pct(stock: &str, tp: f64, upside: &str) -> Recommendation {
    Recommendation {
        stock: stock.to_string(),
        tp: Some(Figure::Number(tp)),
        price: None,
        upside: Some(Figure::Text(upside.to_string())),
    }
}

/// Target, current price, and numeric upside.
fn call_full(stock: &str, tp: f64, price: f64, upside: f64) -> Recommendation {
    Recommendation {
        stock: stock.to_string(),
        tp: Some(Figure::Number(tp)),
        price: Some(Figure::Number(price)),
        upside: Some(Figure::Number(upside)),
    }
}

/// Scrip listed without a numeric call.
fn listed(stock: &str) -> Recommendation {
    Recommendation {
        stock: stock.to_string(),
        tp: None,
        price: None,
        upside: None,
    }
}

pub fn brokers() -> Vec<Broker> {
    vec![
        broker(
            "BMA",
            "215k",
            vec![
                call_pct("SITC", 1441.0, "40%"),
                call_pct("HALEON", 1318.0, "35%"),
                call_pct("SAZEW", 2626.0, "30%"),
                call_pct("MUGHAL", 140.0, "14%"),
                call_pct("DGKC", 348.0, "48%"),
                call_pct("FCCL", 78.0, "42%"),
                call_pct("GWLC", 87.0, "68%"),
                call_pct("ISL", 159.0, "68%"),
                call_pct("OGDCL", 350.0, "49%"),
                call_pct("MLCF", 151.0, "60%"),
            ],
        ),
        broker(
            "Insight",
            "213.6k",
            vec![
                call("OGDCL", 423.0),
                call("PPL", 419.0),
                call("PSO", 680.0),
                call("MEEZAN", 647.0),
                call("SAZEW", 2564.0),
                call("KOHC", 143.0),
                call("FCCL", 77.0),
                listed("ALPHA STOCKS"),
                listed("NATF"),
                listed("PAKOXY"),
            ],
        ),
        broker(
            "Taurus",
            "206k",
            vec![
                call_full("MEBL*", 623.0, 445.0, 40.0),
                call_full("BOP*", 46.0, 34.0, 35.0),
                call_full("MCB*", 468.0, 360.0, 30.0),
                call_full("HBL*", 400.0, 309.0, 29.0),
                call_full("FFC", 670.0, 585.0, 14.0),
                call_full("OGDC", 392.0, 265.0, 48.0),
                call_full("PPL", 300.0, 211.0, 42.0),
                call_full("MLCF*", 156.0, 105.0, 49.0),
                call_full("PSO", 727.0, 453.0, 60.0),
                call_full("INDU", 2700.0, 2020.0, 34.0),
            ],
        ),
        broker(
            "Ismail Iqbal",
            "215k",
            vec![
                call("OGDC", 365.0),
                call("PPL", 325.0),
                call("UBL", 500.0),
                call("MCB", 487.0),
                call("FFC", 709.0),
                call("FATIMA", 205.0),
                call("MLCF", 172.0),
                call("MUGHAL", 157.0),
                listed("ALPHA STOCKS"),
                listed("NATF"),
            ],
        ),
        broker(
            "Foundation",
            "214k",
            vec![
                call("UBL", 495.0),
                call("BAFL", 136.0),
                call("EFERT", 278.0),
                call("OGDC", 375.0),
                call("PPL", 275.0),
                call("MLCF", 162.0),
                call("AIRLINK", 256.0),
                call("PSO", 694.0),
                call("SAZEW", 2313.0),
                call("ILP", 101.0),
            ],
        ),
        broker(
            "IGI",
            "215k",
            vec![
                call("UBL", 460.0),
                call("NBP", 260.0),
                call("MCB", 467.0),
                call("OGDC", 368.0),
                call("PPL", 285.0),
                call("PSO", 678.0),
                call("MLCF", 165.0),
                call("CHCC", 512.0),
                call("FFC", 678.0),
                call("INDU", 2750.0),
            ],
        ),
        broker(
            "TOPLINE",
            "203k",
            vec![
                listed("OGDC"),
                listed("MEBL"),
                listed("FFC"),
                listed("HBL"),
                listed("ENGROH"),
                listed("SYS"),
                listed("MLCF"),
                listed("PAEL"),
                listed("ALPHA STOCKS"),
                listed("ATLH"),
            ],
        ),
        broker(
            "AHL",
            "213.6k",
            vec![
                call("MEBL", 531.0),
                call("NBP", 273.5),
                call("FFC", 712.0),
                call("OGDC", 347.0),
                call("PPL", 261.0),
                call("FCCL", 70.4),
                call("KOHC", 154.6),
                call("NPL", 90.0),
                call("NCPL", 74.7),
                call("SYS", 207.8),
            ],
        ),
    ]
}

/// The two example signals the dashboard starts with.
pub fn seed_signals() -> Vec<SignalDraft> {
    vec![
        SignalDraft {
            symbol: "MEBL".to_string(),
            buying_range: "440-450".to_string(),
            tp1: 520.0,
            tp2: 600.0,
            stop_loss: 420.0,
            horizon: Horizon::Long,
        },
        SignalDraft {
            symbol: "SYS".to_string(),
            buying_range: "205-210".to_string(),
            tp1: 240.0,
            tp2: 275.0,
            stop_loss: 195.0,
            horizon: Horizon::Swing,
        },
    ]
}
