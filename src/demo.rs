use std::path::PathBuf;
use std::sync::Mutex;

use clap::Args;

use quote_intake::catalog::QuoteProduct;
use quote_intake::config::AppConfig;
use quote_intake::error::AppError;
use quote_intake::intake::{
    FamilyMedisureForm, GolfersForm, MarineCargoForm, SubmissionSink,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Vocabulary CSV export merged over the standard catalog
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
    /// Skip the line-item portions of the demo
    #[arg(long)]
    pub(crate) skip_line_items: bool,
}

/// Sink collecting emitted snapshots so the demo can print them afterwards.
struct MemorySink<S> {
    events: Mutex<Vec<S>>,
}

impl<S> Default for MemorySink<S> {
    fn default() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }
}

impl<S: Clone> MemorySink<S> {
    fn events(&self) -> Vec<S> {
        self.events.lock().expect("sink mutex poisoned").clone()
    }
}

impl<S: Send> SubmissionSink<S> for MemorySink<S> {
    fn accept(&self, snapshot: S) {
        self.events.lock().expect("sink mutex poisoned").push(snapshot);
    }
}

pub(crate) fn run_demo(args: DemoArgs, config: &AppConfig) -> Result<(), AppError> {
    let DemoArgs {
        catalog_csv,
        skip_line_items,
    } = args;

    let csv_path = catalog_csv.or_else(|| config.catalog.csv_path.clone());
    let catalog = crate::cli::load_catalog(csv_path)?;

    println!("Quote intake demo");
    for product in QuoteProduct::ordered() {
        let fields: Vec<&str> = catalog
            .vocabularies_for(product)
            .iter()
            .map(|vocabulary| vocabulary.field.as_str())
            .collect();
        println!("- {}: select fields [{}]", product.label(), fields.join(", "));
    }

    marine_cargo_demo();
    if skip_line_items {
        return Ok(());
    }
    golfers_demo();
    medisure_demo();

    Ok(())
}

fn marine_cargo_demo() {
    println!("\nMarine cargo intake");
    let sink = MemorySink::default();
    let mut form = MarineCargoForm::new();

    if let Err(err) = form.submit(&sink) {
        println!("- Empty form rejected: {err}");
    }

    form.set_field("company_name", "Acme Ltd");
    form.set_field("contact_person", "J. Doe");
    form.set_field("phone", "+254700000000");
    form.set_field("email", "j@acme.com");
    form.set_field("cargo_type", "General Cargo");
    form.set_field("transport_mode", "Sea Freight");
    form.set_field("origin", "Mombasa");
    form.set_field("destination", "Durban");
    form.set_field("cargo_value", "1,000,000");

    match form.submit(&sink) {
        Ok(()) => println!("- Submission accepted; form reset for the next quote"),
        Err(err) => println!("- Submission rejected: {err}"),
    }

    print_snapshots(&sink.events());
}

fn golfers_demo() {
    println!("\nGolfers/sportsman intake");
    let sink = MemorySink::default();
    let mut form = GolfersForm::new();

    form.set_field("full_name", "A. Wanjiru");
    form.set_field("phone", "+254711111111");
    form.set_field("email", "a.wanjiru@example.com");
    form.set_field("sport_type", "Golf");
    form.set_field("coverage_type", "Comprehensive");

    {
        let draft = form.equipment_draft_mut();
        draft.equipment_type = "Golf Clubs".to_string();
        draft.description = "Titleist set".to_string();
        draft.value = "KES 50,000".to_string();
    }
    match form.add_equipment() {
        Ok(id) => println!("- Equipment committed with id {:?}", id),
        Err(err) => println!("- Equipment rejected: {err}"),
    }

    {
        let draft = form.equipment_draft_mut();
        draft.equipment_type = "Range Finder".to_string();
        draft.description = "Laser range finder".to_string();
        draft.value = "0".to_string();
    }
    if let Err(err) = form.add_equipment() {
        println!("- Zero-value equipment rejected: {err}");
    }

    println!("- Running equipment total: {}", form.equipment_total());

    match form.submit(&sink) {
        Ok(()) => println!("- Submission accepted; form reset for the next quote"),
        Err(err) => println!("- Submission rejected: {err}"),
    }

    print_snapshots(&sink.events());
}

fn medisure_demo() {
    println!("\nFamily medisure intake");
    let sink = MemorySink::default();
    let mut form = FamilyMedisureForm::new();

    form.set_field("principal_name", "P. Otieno");
    form.set_field("id_number", "12345678");
    form.set_field("phone", "+254722222222");
    form.set_field("email", "p.otieno@example.com");
    form.set_field("plan_type", "Premium");
    form.set_field("hospital_preference", "Nairobi Hospital");

    {
        let draft = form.member_draft_mut();
        draft.name = "M. Otieno".to_string();
        draft.relationship = "Spouse".to_string();
        draft.date_of_birth = "1988-04-12".to_string();
    }
    match form.add_family_member() {
        Ok(id) => println!("- Dependant committed with id {:?}", id),
        Err(err) => println!("- Dependant rejected: {err}"),
    }

    {
        let draft = form.member_draft_mut();
        draft.name = "K. Otieno".to_string();
        draft.relationship = "Child".to_string();
    }
    if let Err(err) = form.add_family_member() {
        println!("- Incomplete dependant rejected: {err}");
    }

    match form.submit(&sink) {
        Ok(()) => println!("- Submission accepted; form reset for the next quote"),
        Err(err) => println!("- Submission rejected: {err}"),
    }

    print_snapshots(&sink.events());
}

fn print_snapshots<S: serde::Serialize>(snapshots: &[S]) {
    for snapshot in snapshots {
        match serde_json::to_string_pretty(snapshot) {
            Ok(json) => println!("  Snapshot delivered to host:\n{json}"),
            Err(err) => println!("  Snapshot unavailable: {err}"),
        }
    }
}
