use std::cmp::Ordering;

/// Orders `a` before `b` when the digits of `a` followed by `b` read larger than the reverse
pub fn concat_order(a: u64, b: u64) -> Ordering {
    let (a, b) = (a.to_string(), b.to_string());
    let ab = a.chars().chain(b.chars());
    let ba = b.chars().chain(a.chars());
    // Both concatenations have the same length, so lexicographic order is numeric order.
    ba.cmp(ab)
}

/// Sort so the decimal concatenation of the values is as large as possible
pub fn largest_concatenation_order(values: &[u64]) -> Vec<u64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|&a, &b| concat_order(a, b));
    sorted
}

/// The concatenated number itself, as digits
pub fn largest_concatenation(values: &[u64]) -> String {
    largest_concatenation_order(values)
        .iter()
        .map(u64::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_by_concatenation() {
        assert_eq!(largest_concatenation_order(&[4, 94, 9, 14, 1]), vec![9, 94, 4, 14, 1]);
        assert_eq!(largest_concatenation_order(&[8, 89]), vec![89, 8]);
        assert_eq!(largest_concatenation_order(&[97, 989, 9]), vec![9, 989, 97]);
        assert_eq!(
            largest_concatenation_order(&[9, 99, 91, 5, 59, 8, 81, 4, 44, 21]),
            vec![9, 99, 91, 8, 81, 59, 5, 4, 44, 21]
        );
    }

    #[test]
    fn concatenated_digits() {
        assert_eq!(largest_concatenation(&[4, 94, 9, 14, 1]), "9944141");
        assert_eq!(largest_concatenation(&[0, 10]), "100");
        assert_eq!(largest_concatenation(&[]), "");
    }

    #[test]
    fn ties_compare_equal() {
        assert_eq!(concat_order(4, 44), Ordering::Equal);
        assert_eq!(concat_order(9, 1), Ordering::Less);
    }
}
