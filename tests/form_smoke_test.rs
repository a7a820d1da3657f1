use std::io::Write;

use tempfile::NamedTempFile;

use calorie_counter_rs::form::{Form, load_form};
use calorie_counter_rs::interface::render_summary;
use calorie_counter_rs::models::Category;

#[test]
fn test_add_calculate_clear_cycle() {
    let mut form = Form::new();

    for (expected, calories) in ["300", "200"].iter().enumerate() {
        let before = form.entry_count(Category::Breakfast);
        let entry = form.add_entry(Category::Breakfast, "Item", *calories);
        assert_eq!(entry.number, expected + 1);
        assert_eq!(
            entry.calories_field_id(),
            format!("breakfast-{}-calories", expected + 1)
        );
        assert_eq!(form.entry_count(Category::Breakfast), before + 1);
    }

    form.add_entry(Category::Lunch, "Sandwich", "500");
    form.add_entry(Category::Dinner, "Pasta", "600");
    form.add_entry(Category::Snacks, "Nuts", "100");
    form.add_entry(Category::Exercise, "Run", "200");
    form.set_budget("2000");

    let summary = form.calculate().unwrap();
    assert_eq!(render_summary(&summary).headline, "500 Calorie Surplus");
    assert!(!form.is_output_hidden());

    let html = form.output().unwrap().to_html();
    assert!(html.contains("<span class=\"surplus\">500 Calorie Surplus</span>"));
    assert!(html.contains("<p>2000 Calories Budgeted</p>"));
    assert!(html.contains("<p>1700 Calories Consumed</p>"));
    assert!(html.contains("<p>200 Calories Burned</p>"));

    form.clear();
    for category in Category::ALL {
        assert_eq!(form.entry_count(category), 0);
    }
    assert_eq!(form.budget(), "");
    assert!(form.is_output_hidden());
    assert!(form.output().is_none());
}

#[test]
fn test_invalid_submit_shows_no_output() {
    let mut form = Form::new();
    form.set_budget("2000");
    form.add_entry(Category::Lunch, "Burger", "7e2");

    assert!(form.calculate().is_err());
    assert!(form.output().is_none());
    assert!(form.is_output_hidden());

    // Fixing the value lets the same form go through.
    form.set_entry(Category::Lunch, 1, "Burger", "700").unwrap();
    let summary = form.calculate().unwrap();
    assert_eq!(summary.remaining, 1300);
}

#[test]
fn test_recalculate_replaces_output() {
    let mut form = Form::new();
    form.set_budget("500");
    form.calculate().unwrap();
    assert_eq!(form.output().unwrap().headline, "500 Calorie Surplus");

    form.add_entry(Category::Dinner, "Feast", "800");
    form.calculate().unwrap();
    assert_eq!(form.output().unwrap().headline, "300 Calorie Deficit");
    assert_eq!(form.output().unwrap().class, "deficit");
}

#[test]
fn test_snapshot_file_round_into_calculation() {
    let json = r#"{
        "budget": 2000,
        "entries": {
            "breakfast": [{"name": "Oatmeal", "calories": 300}, {"name": "Juice", "calories": "200"}],
            "lunch": [{"name": "Sandwich", "calories": 500}],
            "dinner": [{"name": "Pasta", "calories": 600}],
            "snacks": [{"name": "Nuts", "calories": 100}],
            "exercise": [{"name": "Run", "calories": 200}]
        }
    }"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let mut form = load_form(file.path()).unwrap();
    assert_eq!(form.total_entries(), 6);

    let summary = form.calculate().unwrap();
    assert_eq!(summary.consumed, 1700);
    assert_eq!(summary.remaining, 500);
}
