use std::collections::HashSet;

/// Whether `c` is formed by merging `a` and `b` while keeping each one's character order.
///
/// Positions `(i, j)` into `a` and `b` are explored depth-first on an explicit stack;
/// a character shared by both heads forks the search.
pub fn is_interleaving(a: &str, b: &str, c: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let c: Vec<char> = c.chars().collect();
    if a.len() + b.len() != c.len() {
        return false;
    }

    let mut stack = vec![(0usize, 0usize)];
    let mut visited = HashSet::new();
    while let Some((i, j)) = stack.pop() {
        if !visited.insert((i, j)) {
            continue;
        }
        if i == a.len() && j == b.len() {
            return true;
        }
        let next = c[i + j];
        if a.get(i) == Some(&next) {
            stack.push((i + 1, j));
        }
        if b.get(j) == Some(&next) {
            stack.push((i, j + 1));
        }
    }
    false
}
