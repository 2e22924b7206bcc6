use crate::models::{Broker, Figure, Recommendation};

/// Build a recommendation from optional raw field values.
pub fn make_rec(stock: &str, tp: Option<f64>, upside: Option<&str>) -> Recommendation {
    Recommendation {
        stock: stock.to_string(),
        tp: tp.map(Figure::Number),
        price: None,
        upside: upside.map(|u| Figure::Text(u.to_string())),
    }
}

pub fn make_broker(name: &str, index_target: &str, recs: Vec<Recommendation>) -> Broker {
    Broker {
        name: name.to_string(),
        index_target: index_target.to_string(),
        recommendations: recs,
    }
}

/// Two-broker fixture with the OGDC/OGDCL alias split, a starred scrip, and
/// a listing without a numeric target.
pub fn sample_brokers() -> Vec<Broker> {
    vec![
        make_broker(
            "Alpha",
            "215k",
            vec![
                make_rec("OGDCL", Some(350.0), Some("49%")),
                make_rec("MEBL*", Some(623.0), None),
                make_rec("NATF", None, None),
            ],
        ),
        make_broker(
            "Beta",
            "206k",
            vec![
                make_rec("OGDC", Some(392.0), Some("48%")),
                make_rec("PPL", Some(300.0), Some("42%")),
            ],
        ),
    ]
}
