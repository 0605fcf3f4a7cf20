//! Application shell: navigation, wizard lifecycle and submission storage.

use supplyworks::app::{AppState, ConfirmationAction, View};
use supplyworks::flows::{MaterialSupplierField as MF, VehicleOwnerField as VF};
use supplyworks::session::PartnerStatus;
use supplyworks::submission::{JsonFileSink, MemorySink, SubmissionSink};
use supplyworks::wizard::{Attachment, FieldValue};

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.into())
}

fn image(name: &str) -> FieldValue {
    FieldValue::Attach(Attachment::new(name, "image/jpeg", vec![0xFF, 0xD8]))
}

fn run_vehicle_owner_to_submission(app: &mut AppState) {
    let wizard = app.open_vehicle_registration();
    wizard.set_field(VF::FullName, text("Sunil Fernando"));
    wizard.set_field(VF::NicNumber, text("851234567V"));
    wizard.set_field(VF::MobileNumber, text("+94 71 2345678"));
    wizard.set_field(VF::Email, text("sunil@example.com"));
    wizard.set_field(VF::Password, text("abc123"));
    wizard.set_field(VF::ConfirmPassword, text("abc123"));
    assert!(wizard.advance());

    wizard.set_field(VF::District, text("Galle"));
    wizard.set_field(VF::CityTown, text("Galle"));
    wizard.set_field(VF::Address, text("12 Beach Road"));
    assert!(wizard.advance());

    wizard.set_field(VF::VehicleType, text("Tipper"));
    wizard.set_field(VF::ModelBrand, text("TATA 1615"));
    wizard.set_field(VF::Description, text("10 cube tipper with driver"));
    assert!(wizard.advance());

    wizard.set_field(VF::PriceAmount, text("2500"));
    assert!(wizard.advance());

    wizard.set_field(VF::VehicleImage, image("truck.jpg"));
    wizard.set_field(VF::NicLicenseImage, image("nic.jpg"));
    assert!(wizard.advance());

    wizard.set_field(VF::AgreeToTerms, FieldValue::Flag(true));
    assert!(app.submit_vehicle_registration());
}

#[test]
fn reopening_a_wizard_starts_from_scratch() {
    let mut app = AppState::new();
    let wizard = app.open_material_registration();
    wizard.set_field(MF::FullName, text("Kamala Silva"));
    wizard.set_field(MF::MaterialTypes, FieldValue::Toggle("Sand".into()));

    let wizard = app.open_material_registration();
    assert_eq!(wizard.step(), 1);
    assert!(wizard.form().full_name.is_empty());
    assert!(wizard.form().material_types.is_empty());
}

#[test]
fn abandoning_a_wizard_releases_its_attachments() {
    let mut app = AppState::new();
    let wizard = app.open_material_registration();
    wizard.set_field(MF::MaterialImages, image("sand.jpg"));
    let preview = wizard.form().material_images[0].preview();
    assert!(preview.bytes().is_some());

    app.close_material_registration();
    assert!(preview.is_released());
    assert!(preview.bytes().is_none());
}

#[test]
fn successful_submission_shows_confirmation_then_partner_dashboard() {
    let mut app = AppState::new();
    run_vehicle_owner_to_submission(&mut app);

    assert_eq!(app.view, View::Confirmation);
    let record = app.pending_registration().unwrap();
    assert_eq!(record.role(), "vehicle_owner");
    assert_eq!(record.flow().label(), "Vehicle Owner");

    app.confirm(ConfirmationAction::Dashboard);
    assert_eq!(app.view, View::PartnerDashboard);

    let user = app.user.as_ref().unwrap();
    assert!(user.authenticated);
    assert_eq!(user.email, "sunil@example.com");

    let partner = app.partner.as_ref().unwrap();
    assert_eq!(partner.status, PartnerStatus::Pending);
    assert_eq!(partner.district, "Galle");
    assert_eq!(partner.total_jobs, 0);
}

#[test]
fn failed_submission_keeps_wizard_and_view() {
    let mut app = AppState::new();
    app.open_vehicle_registration();
    assert!(!app.submit_vehicle_registration());

    assert_eq!(app.view, View::Home);
    assert!(app.pending_registration().is_none());
    let wizard = app.vehicle_registration().unwrap();
    assert!(wizard.errors().contains("agree_to_terms"));
}

#[test]
fn logout_after_registration_clears_the_whole_session() {
    let mut app = AppState::new();
    run_vehicle_owner_to_submission(&mut app);
    app.confirm(ConfirmationAction::Dashboard);

    app.logout();
    assert!(app.user.is_none());
    assert!(app.partner.is_none());
    assert_eq!(app.view, View::Home);
}

#[test]
fn submitted_wizard_record_flows_into_a_sink() {
    let mut app = AppState::new();
    let wizard = app.open_vehicle_registration();
    wizard.set_field(VF::AgreeToTerms, FieldValue::Flag(true));
    let record = wizard.submit().unwrap();

    let mut sink = MemorySink::new();
    sink.submit(record).unwrap();
    assert_eq!(sink.records().len(), 1);
    assert_eq!(sink.records()[0].role(), "vehicle_owner");
}

#[test]
fn json_file_sink_persists_under_the_submissions_dir() {
    let mut app = AppState::new();
    let wizard = app.open_vehicle_registration();
    wizard.set_field(VF::FullName, text("Sunil Fernando"));
    wizard.set_field(VF::AgreeToTerms, FieldValue::Flag(true));
    let record = wizard.submit().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let mut sink = JsonFileSink::new(dir.path().join("submissions"));
    sink.submit(record).unwrap();

    let entries: Vec<_> = std::fs::read_dir(sink.dir()).unwrap().collect();
    assert_eq!(entries.len(), 1);
    let body = std::fs::read_to_string(entries[0].as_ref().unwrap().path()).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed["role"], "vehicle_owner");
    assert_eq!(parsed["full_name"], "Sunil Fernando");
}
