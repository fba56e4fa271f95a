use super::common::{equipment_draft, member_draft};
use crate::intake::domain::{EquipmentDraft, FamilyMemberDraft, IntakeError};
use crate::intake::items::LineItemEditor;
use crate::intake::numeric::parse_amount;

#[test]
fn sequential_commits_preserve_order_with_distinct_identities() {
    let mut editor: LineItemEditor<FamilyMemberDraft> = LineItemEditor::new();

    *editor.staging_mut() = member_draft("M. Otieno", "Spouse", "1988-04-12");
    let first = editor.commit_staging().expect("first commit");
    *editor.staging_mut() = member_draft("K. Otieno", "Child", "2015-09-30");
    let second = editor.commit_staging().expect("second commit");
    *editor.staging_mut() = member_draft("A. Otieno", "Child", "2018-01-22");
    let third = editor.commit_staging().expect("third commit");

    let items = editor.items();
    assert_eq!(items.len(), 3);
    assert_eq!(items[0].name, "M. Otieno");
    assert_eq!(items[1].name, "K. Otieno");
    assert_eq!(items[2].name, "A. Otieno");

    assert!(first < second && second < third);
    assert_eq!(items[0].id, first);
    assert_eq!(items[1].id, second);
    assert_eq!(items[2].id, third);
}

#[test]
fn commit_clears_the_staging_buffer() {
    let mut editor: LineItemEditor<FamilyMemberDraft> = LineItemEditor::new();
    *editor.staging_mut() = member_draft("M. Otieno", "Spouse", "1988-04-12");
    editor.commit_staging().expect("commit");
    assert_eq!(editor.staging(), &FamilyMemberDraft::default());
}

#[test]
fn failed_commit_leaves_staging_and_collection_unchanged() {
    let mut editor: LineItemEditor<FamilyMemberDraft> = LineItemEditor::new();
    *editor.staging_mut() = member_draft("M. Otieno", "Spouse", "1988-04-12");
    editor.commit_staging().expect("valid commit");

    let incomplete = member_draft("K. Otieno", "", "2015-09-30");
    *editor.staging_mut() = incomplete.clone();
    let error = editor.commit_staging().expect_err("missing relationship");

    assert_eq!(
        error,
        IntakeError::MissingRequiredField {
            subject: "family member"
        }
    );
    assert_eq!(editor.staging(), &incomplete);
    assert_eq!(editor.len(), 1);
}

#[test]
fn remove_is_idempotent_and_keeps_other_items_intact() {
    let mut editor: LineItemEditor<EquipmentDraft> = LineItemEditor::new();
    *editor.staging_mut() = equipment_draft("Golf Clubs", "Titleist set", "50,000");
    let first = editor.commit_staging().expect("first commit");
    *editor.staging_mut() = equipment_draft("Golf Bag", "Tour bag", "12,500");
    let second = editor.commit_staging().expect("second commit");

    editor.remove(first);
    assert_eq!(editor.len(), 1);
    assert_eq!(editor.items()[0].id, second);

    editor.remove(first);
    assert_eq!(editor.len(), 1);
    assert_eq!(editor.items()[0].id, second);
}

#[test]
fn equipment_commit_strips_formatting_and_keeps_numeric_text() {
    let mut editor: LineItemEditor<EquipmentDraft> = LineItemEditor::new();
    *editor.staging_mut() = equipment_draft("Golf Clubs", "Titleist set", "KES 50,000");
    editor.commit_staging().expect("commit");

    let entry = &editor.items()[0];
    assert_eq!(entry.value, "50000");
    assert_eq!(entry.amount(), 50000.0);
}

#[test]
fn equipment_commit_rejects_non_positive_and_unparseable_values() {
    let mut editor: LineItemEditor<EquipmentDraft> = LineItemEditor::new();

    *editor.staging_mut() = equipment_draft("Range Finder", "Laser range finder", "0");
    let error = editor.commit_staging().expect_err("zero value");
    assert_eq!(
        error,
        IntakeError::InvalidNumericValue {
            field: "equipment value"
        }
    );

    *editor.staging_mut() = equipment_draft("Range Finder", "Laser range finder", "abc");
    editor.commit_staging().expect_err("unparseable value");

    assert!(editor.is_empty());
}

#[test]
fn clear_discards_items_and_staging_but_identities_stay_monotonic() {
    let mut editor: LineItemEditor<EquipmentDraft> = LineItemEditor::new();
    *editor.staging_mut() = equipment_draft("Golf Clubs", "Titleist set", "50,000");
    let before = editor.commit_staging().expect("commit");

    editor.clear();
    assert!(editor.is_empty());
    assert_eq!(editor.staging(), &EquipmentDraft::default());

    *editor.staging_mut() = equipment_draft("Golf Bag", "Tour bag", "12,500");
    let after = editor.commit_staging().expect("commit after clear");
    assert!(after > before);
}

#[test]
fn parse_amount_strips_currency_formatting() {
    assert_eq!(parse_amount("cargo value", "1,000,000").expect("parses"), 1_000_000.0);
    assert_eq!(parse_amount("cargo value", "KES 50,000").expect("parses"), 50_000.0);
    assert_eq!(parse_amount("cargo value", "12,500.50").expect("parses"), 12_500.5);
}

#[test]
fn parse_amount_rejects_blank_and_malformed_input() {
    for raw in ["", "   ", "abc", "1.2.3"] {
        let error = parse_amount("cargo value", raw).expect_err("rejected");
        assert_eq!(
            error,
            IntakeError::InvalidNumericValue {
                field: "cargo value"
            }
        );
    }
}

#[test]
fn parse_amount_rejects_non_positive_results() {
    parse_amount("cargo value", "0").expect_err("zero");
    parse_amount("cargo value", "0.00").expect_err("zero with decimals");
}
