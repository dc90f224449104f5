use chrono::NaiveDate;
use mietzins_core::compute::Outcome;
use mietzins_core::dialog::{DialogError, DialogField};
use mietzins_core::intake::{ContractSource, SampleContract};
use mietzins_core::model::Goal;
use mietzins_core::validation::ValidationError;
use mietzins_core::{compose_letter, CalculationEngine, CalculationError, DialogController, EngineConfig};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 1).unwrap()
}

#[test]
fn test_upload_dialog_calculation_and_letter() {
    init_tracing();
    let record = SampleContract.extract(b"%PDF-1.7", "mietvertrag.pdf").unwrap();
    let mut dialog = DialogController::new(record);
    assert_eq!(dialog.progress().total, 3);

    // Rejected answers leave the dialog where it was.
    assert_eq!(dialog.current_field(), Some(DialogField::LastIncrease));
    dialog.submit_answer("01.10.2022").unwrap();
    assert_eq!(dialog.current_field(), Some(DialogField::GrossRent));
    let err = dialog.submit_answer("-50").unwrap_err();
    assert!(matches!(err, DialogError::Rejected(_)));
    assert_eq!(dialog.current_field(), Some(DialogField::GrossRent));
    dialog.submit_answer("CHF 2'650.-").unwrap();
    dialog.submit_answer("Brief").unwrap();
    assert!(dialog.is_complete());
    assert_eq!(dialog.progress().percentage, 100);
    assert_eq!(dialog.submit_answer("noch etwas").unwrap_err(), DialogError::NoActiveQuestion);

    let record = dialog.into_record();
    assert_eq!(record.gross_rent, Some(2650.0));
    assert_eq!(record.goal, Some(Goal::Letter));

    // Four years since the 2022 increase: 5.82 - 2.00 - 1.52 = 2.30.
    let engine = CalculationEngine::new(EngineConfig::default().with_reference_date(reference_date()));
    let result = engine.calculate(&record).unwrap();
    assert_eq!(result.outcome, Outcome::Reduction);
    assert!(result.is_reduction_possible);
    assert!((result.years_since_adjustment - 4.0).abs() < 1e-9);
    assert!((result.effective_reduction_percent - 2.30).abs() < 1e-9);
    assert!((result.new_rent - 2344.80).abs() < 1e-6);
    assert!((result.annual_savings - 662.40).abs() < 1e-6);
    assert_eq!(result.breakdown.len(), 5);

    let letter = compose_letter(&record, &result, engine.config().today()).unwrap();
    assert_eq!(letter.date, "1. Oktober 2026");
    assert_eq!(letter.place_and_date, "8006 Zürich, 1. Oktober 2026");
    assert_eq!(letter.signature, "Max Muster");
    assert_eq!(letter.salutation, "Sehr geehrte Damen und Herren der Muster Immobilien AG");
    assert_eq!(letter.sender, vec!["Max Muster", "Nordstrasse 9", "8006 Zürich"]);
    let text = letter.to_plain_text();
    assert!(text.contains("von 1.75 % auf 1.25 %"));
    assert!(text.contains("Reduktion von 2.30 %"));
    assert!(text.contains("CHF 2'344.80"));
}

#[test]
fn test_result_survives_json_boundary() {
    init_tracing();
    let mut record = SampleContract::record();
    record.last_increase_date = Some("2022-10-01".into());
    let engine = CalculationEngine::new(EngineConfig::default().with_reference_date(reference_date()));
    let result = engine.calculate(&record).unwrap();

    let json = result.to_json_string().unwrap();
    assert!(json.contains("\"effectiveReductionPercent\""));
    let parsed = mietzins_core::CalculationResult::from_json_str(&json).unwrap();
    assert_eq!(parsed, result);
}

#[test]
fn test_implausible_contract_is_rejected_before_calculation() {
    init_tracing();
    let mut record = SampleContract::record();
    record.contract_date = NaiveDate::from_ymd_opt(1985, 1, 1);
    let engine = CalculationEngine::new(EngineConfig::default().with_reference_date(reference_date()));

    let err = engine.calculate(&record).unwrap_err();
    assert!(matches!(
        err,
        CalculationError::InvalidInput(ValidationError::ImplausibleContractYear { year: 1985, .. })
    ));
}
