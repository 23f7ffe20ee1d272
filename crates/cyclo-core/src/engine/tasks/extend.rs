use crate::core::mass_table::Alphabet;
use crate::core::models::peptide::Peptide;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One frontier peptide grown by one monomer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extension {
    /// Index of the parent peptide in the frontier that was extended.
    pub parent: usize,
    pub peptide: Peptide,
    pub mass: u32,
}

/// Extends every frontier peptide by every monomer of `alphabet`.
///
/// The output is ordered by parent first, then by alphabet order. Frontier peptides
/// are lighter than a validated target, so `mass` cannot overflow.
pub fn extend(frontier: &[Peptide], alphabet: &Alphabet) -> Vec<Extension> {
    let mut extensions = Vec::with_capacity(frontier.len() * alphabet.len());
    for (parent, peptide) in frontier.iter().enumerate() {
        let base_mass = peptide.mass();
        for &monomer in alphabet.monomers() {
            extensions.push(Extension {
                parent,
                peptide: peptide.extended(monomer),
                mass: base_mass + monomer.mass(),
            });
        }
    }
    extensions
}

/// Applies `judge` to every item, preserving order.
///
/// With the `parallel` feature the work is spread over the rayon pool; the result is
/// identical to the sequential build.
pub fn evaluate<I, T, F>(items: &[I], judge: F) -> Vec<T>
where
    I: Sync,
    F: Fn(&I) -> T + Sync + Send,
    T: Send,
{
    #[cfg(not(feature = "parallel"))]
    let iterator = items.iter();

    #[cfg(feature = "parallel")]
    let iterator = items.par_iter();

    iterator.map(judge).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extend_empty_root_yields_one_extension_per_monomer() {
        let alphabet = Alphabet::standard();
        let extensions = extend(&[Peptide::empty()], &alphabet);
        assert_eq!(extensions.len(), 20);
        assert!(extensions.iter().all(|e| e.parent == 0 && e.peptide.len() == 1));
        assert_eq!(extensions[0].peptide.to_string(), "G");
        assert_eq!(extensions[0].mass, 57);
    }

    #[test]
    fn extend_orders_by_parent_then_alphabet() {
        let alphabet = Alphabet::from_symbols("GW").unwrap();
        let frontier: Vec<Peptide> = vec!["A".parse().unwrap(), "S".parse().unwrap()];
        let extensions = extend(&frontier, &alphabet);
        let rendered: Vec<String> = extensions.iter().map(|e| e.peptide.to_string()).collect();
        assert_eq!(rendered, vec!["AG", "AW", "SG", "SW"]);
        assert_eq!(
            extensions.iter().map(|e| e.parent).collect::<Vec<_>>(),
            vec![0, 0, 1, 1]
        );
        assert!(extensions.iter().all(|e| e.mass == e.peptide.mass()));
    }

    #[test]
    fn extend_with_empty_alphabet_or_frontier_yields_nothing() {
        let empty = Alphabet::from_monomers(Vec::new());
        assert!(extend(&[Peptide::empty()], &empty).is_empty());
        assert!(extend(&[], &Alphabet::standard()).is_empty());
    }

    #[test]
    fn evaluate_preserves_extension_order() {
        let alphabet = Alphabet::standard();
        let extensions = extend(&[Peptide::empty()], &alphabet);
        let masses = evaluate(&extensions, |e: &Extension| e.mass);
        let expected: Vec<u32> = extensions.iter().map(|e| e.mass).collect();
        assert_eq!(masses, expected);
    }
}
