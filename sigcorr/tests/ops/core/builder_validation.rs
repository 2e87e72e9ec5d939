use std::sync::Arc;

use sigcorr::{Method, Sigcorr, SigcorrError};
use sigcorr_mock::MockSource;

fn builder() -> sigcorr::SigcorrBuilder {
    Sigcorr::builder().with_source(Arc::new(MockSource::standard()))
}

#[test]
fn source_is_required() {
    let err = Sigcorr::builder().build().err().unwrap();
    assert!(matches!(err, SigcorrError::InvalidArg(_)));
}

#[test]
fn min_pairs_below_two_is_rejected() {
    assert!(builder().min_pairs(1).build().is_err());
    assert!(builder().min_pairs(2).build().is_ok());
}

#[test]
fn confidence_must_be_open_unit_interval() {
    assert!(builder().theil_sen_confidence(0.0).build().is_err());
    assert!(builder().theil_sen_confidence(1.0).build().is_err());
    assert!(builder().theil_sen_confidence(f64::NAN).build().is_err());
    assert!(builder().theil_sen_confidence(0.9).build().is_ok());
}

#[test]
fn default_methods_are_opt_in() {
    let sc = builder().build().unwrap();
    assert!(sc.config().default_methods.is_empty());

    let sc = builder().default_methods(&[Method::Pearson]).build().unwrap();
    assert_eq!(sc.config().default_methods, vec![Method::Pearson]);
}
