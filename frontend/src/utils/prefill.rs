use crate::config::PlanOption;

/// Finds the dropdown option for a plan title: the option text must contain
/// both the first and the second word of the title. When several options
/// qualify the last one wins. Titles shorter than two words match nothing.
pub fn match_plan_option<'a>(title: &str, options: &'a [PlanOption]) -> Option<&'a PlanOption> {
    let mut words = title.split_whitespace();
    let (first, second) = (words.next()?, words.next()?);
    options
        .iter()
        .filter(|option| option.label.contains(first) && option.label.contains(second))
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<PlanOption> {
        [
            ("Basic", "Basic Fitness - ₹999/month"),
            ("Premium", "Premium Fitness - ₹1999/month"),
            ("Yoga", "Yoga Flow - ₹1299/month"),
        ]
        .into_iter()
        .map(|(value, label)| PlanOption { value: value.to_string(), label: label.to_string() })
        .collect()
    }

    #[test]
    fn matches_on_first_two_words() {
        let options = options();
        let found = match_plan_option("Premium Fitness", &options).map(|o| o.value.as_str());
        assert_eq!(found, Some("Premium"));
    }

    #[test]
    fn extra_title_words_are_ignored() {
        let options = options();
        let found = match_plan_option("Yoga Flow Unlimited", &options).map(|o| o.value.as_str());
        assert_eq!(found, Some("Yoga"));
    }

    #[test]
    fn single_word_title_matches_nothing() {
        assert!(match_plan_option("Yoga", &options()).is_none());
    }

    #[test]
    fn unknown_plan_matches_nothing() {
        assert!(match_plan_option("Personal Training", &options()).is_none());
    }

    #[test]
    fn last_matching_option_wins() {
        let mut options = options();
        options.push(PlanOption {
            value: "Basic-annual".to_string(),
            label: "Basic Fitness - annual".to_string(),
        });
        let found = match_plan_option("Basic Fitness", &options).map(|o| o.value.as_str());
        assert_eq!(found, Some("Basic-annual"));
    }
}
