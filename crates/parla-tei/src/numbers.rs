/// Format `value` with `separator` between groups of three digits.
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn groups_by_three() {
        assert_eq!(group_thousands(0, '.'), "0");
        assert_eq!(group_thousands(999, '.'), "999");
        assert_eq!(group_thousands(3941, '.'), "3.941");
        assert_eq!(group_thousands(631188, ','), "631,188");
        assert_eq!(group_thousands(1234567, '.'), "1.234.567");
    }

    proptest! {
        #[test]
        fn separators_only_split_digits(value in any::<u64>()) {
            let grouped = group_thousands(value, ',');
            prop_assert_eq!(grouped.replace(',', ""), value.to_string());
            let groups: Vec<&str> = grouped.split(',').collect();
            prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
            for group in &groups[1..] {
                prop_assert_eq!(group.len(), 3);
            }
        }
    }
}
