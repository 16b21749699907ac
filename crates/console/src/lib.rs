//! `vending-console`
//!
//! **Responsibility:** thin demo driver around the vending machine API.

pub mod demo;
pub mod output;

pub use output::{OutputFormat, print_catalogue};

#[cfg(test)]
mod tests {
    use super::*;
    use vending_machine::{Item, VendingMachine};

    fn run_demo(format: OutputFormat) -> (VendingMachine, String) {
        let machine = VendingMachine::new();
        let mut out = Vec::new();
        demo::run(&machine, &mut out, format).unwrap();
        (machine, String::from_utf8(out).unwrap())
    }

    #[test]
    fn demo_ends_with_two_knives_left() {
        let (machine, text) = run_demo(OutputFormat::Text);

        let names: Vec<String> = machine
            .get_catalogue()
            .iter()
            .map(|e| e.item().name().to_string())
            .collect();
        assert_eq!(names, vec!["Knife", "AK-74"]);
        assert_eq!(machine.logger_count(), 2);

        assert!(text.contains("Attempting to buy reindeer meat for 200, result: false"));
        assert!(text.contains("Attempting to buy reindeer meat for 300, result: true"));
        assert!(text.contains("Reindeer Meat, price: 250, category: Food, quantity 2"));
    }

    #[test]
    fn text_output_lists_food_before_weapons() {
        let (_, text) = run_demo(OutputFormat::Text);
        let stocked: Vec<&str> = text
            .split("Catalogue (stocked):")
            .nth(1)
            .unwrap()
            .lines()
            .skip(1)
            .take(4)
            .collect();
        assert_eq!(
            stocked,
            vec![
                "Reindeer Meat, price: 250, category: Food, quantity 5",
                "Knife, price: 50, category: Weapon, quantity 1",
                "AK-47, price: 100, category: Weapon, quantity 1",
                "AK-74, price: 200, category: Weapon, quantity 1",
            ]
        );
    }

    #[test]
    fn json_output_is_one_document_per_step() {
        let (_, text) = run_demo(OutputFormat::Json);
        let docs: Vec<serde_json::Value> = text
            .lines()
            .filter(|l| l.starts_with('{'))
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(docs.len(), 7);
        assert_eq!(docs[0]["step"], "stocked");
        assert_eq!(docs[0]["entries"][0]["item"]["name"], "Reindeer Meat");
        assert_eq!(docs[0]["entries"][0]["quantity"], 5);
        assert_eq!(docs[6]["entries"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn json_output_carries_no_log_events() {
        vending_observability::init();
        let (_, text) = run_demo(OutputFormat::Json);
        for line in text.lines().filter(|l| !l.is_empty()) {
            if line.starts_with("Attempting to buy") {
                continue;
            }
            let doc: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(doc.get("step").is_some(), "unexpected line: {line}");
        }
    }

    #[test]
    fn output_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn empty_catalogue_prints_header_only() {
        let mut out = Vec::new();
        print_catalogue(&mut out, OutputFormat::Text, "empty", &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nCatalogue (empty):\n\n");

        let machine = VendingMachine::new();
        machine.add_item(&Item::drink("Cola", 150));
        let mut out = Vec::new();
        print_catalogue(&mut out, OutputFormat::Text, "one", &machine.get_catalogue()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Cola, price: 150, category: Drink, quantity 1"));
    }
}
