use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random DIMACS text together with the edges it encodes (1-based).
pub struct RandomDimacs {
    pub text: String,
    pub n: usize,
    pub edges: Vec<(usize, usize, Option<f64>)>,
}

/// Generates a DIMACS document with `n` vertices and `m` edges, sprinkling comments and
/// blank lines everywhere and giving roughly half of the edges an explicit weight.
pub fn random_dimacs(n: usize, m: usize, seed: usize) -> RandomDimacs {
    assert!(n > 0 || m == 0);
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut text = String::new();
    let mut edges = Vec::with_capacity(m);

    noise(&mut rng, &mut text);
    text.push_str(&format!("p edge {} {}\n", n, m));

    for _ in 0..m {
        noise(&mut rng, &mut text);
        let s = rng.random_range(1..=n);
        let t = rng.random_range(1..=n);
        let weight = if rng.random_bool(0.5) {
            // quarters print exactly
            Some(rng.random_range(0..400) as f64 / 4.0)
        } else {
            None
        };
        match weight {
            Some(w) => text.push_str(&format!("e {} {} {}\n", s, t, w)),
            None => text.push_str(&format!("e {} {}\n", s, t)),
        }
        edges.push((s, t, weight));
    }
    noise(&mut rng, &mut text);

    RandomDimacs { text, n, edges }
}

fn noise(rng: &mut StdRng, text: &mut String) {
    for _ in 0..rng.random_range(0..3) {
        match rng.random_range(0..4) {
            0 => text.push_str("c generated\n"),
            1 => text.push_str("%comment\n"),
            2 => text.push('\n'),
            _ => text.push_str(" \t \n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_text() {
        let a = random_dimacs(10, 20, 7);
        let b = random_dimacs(10, 20, 7);
        assert_eq!(a.text, b.text);
        assert_eq!(a.edges.len(), 20);
        assert!(a.edges.iter().all(|&(s, t, _)| (1..=10).contains(&s) && (1..=10).contains(&t)));
    }
}
