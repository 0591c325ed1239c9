pub fn toggle_settled(settled_months: &mut Vec<String>, month_key: &str) {
    if let Some(pos) = settled_months.iter().position(|m| m == month_key) {
        settled_months.remove(pos);
    } else {
        settled_months.push(month_key.to_string());
    }
}

pub fn is_settled(settled_months: &[String], month_key: &str) -> bool {
    settled_months.iter().any(|m| m == month_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes_membership() {
        let mut months = Vec::new();
        toggle_settled(&mut months, "2024-03");
        assert!(is_settled(&months, "2024-03"));
        toggle_settled(&mut months, "2024-03");
        assert!(!is_settled(&months, "2024-03"));
        assert!(months.is_empty());
    }

    #[test]
    fn double_toggle_restores_prior_membership() {
        let mut months = vec!["2024-01".to_string(), "2024-02".to_string()];
        let before = months.clone();
        toggle_settled(&mut months, "2024-02");
        toggle_settled(&mut months, "2024-02");
        assert_eq!(months, before);
    }

    #[test]
    fn settlement_is_per_month_key() {
        let mut months = Vec::new();
        toggle_settled(&mut months, "2024-03");
        assert!(!is_settled(&months, "2024-04"));
    }
}
