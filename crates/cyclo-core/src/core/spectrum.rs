//! Theoretical spectrum generation.
//!
//! Every fragment mass is a difference of two prefix sums: for a peptide of length
//! `n` with `prefix[0] = 0` and `prefix[i + 1] = prefix[i] + mass(residue[i])`, the
//! contiguous sub-sequence `[i, j)` weighs `prefix[j] - prefix[i]`. The cyclic spectrum
//! adds, for each internal fragment (`0 < i` and `j < n`), the complementary fragment
//! that wraps from position `j` around to position `i`.

use super::models::peptide::Peptide;
use super::models::spectrum::{Fragment, Spectrum};

/// Calls `visit(mass, start, length)` for the empty fragment and every fragment of
/// `peptide`, in generation order.
fn for_each_fragment<F>(peptide: &Peptide, cyclic: bool, mut visit: F)
where
    F: FnMut(u32, usize, usize),
{
    let n = peptide.len();
    let prefix = peptide.prefix_masses();
    let total = prefix[n];

    visit(0, 0, 0);
    for i in 0..n {
        for j in (i + 1)..=n {
            let fragment_mass = prefix[j] - prefix[i];
            visit(fragment_mass, i, j - i);

            if cyclic && i > 0 && j < n {
                visit(total - fragment_mass, j, n - (j - i));
            }
        }
    }
}

fn masses(peptide: &Peptide, cyclic: bool) -> Spectrum {
    let n = peptide.len();
    let mut out = Vec::with_capacity(2 + n * n);
    for_each_fragment(peptide, cyclic, |mass, _, _| out.push(mass));
    Spectrum::from_unsorted(out)
}

fn fragments(peptide: &Peptide, cyclic: bool) -> Vec<Fragment> {
    let mut out = Vec::new();
    for_each_fragment(peptide, cyclic, |mass, start, length| {
        out.push(Fragment {
            mass,
            start,
            length,
            subpeptide: peptide.circular_slice(start, length),
        });
    });
    // Stable, so fragments of equal mass keep their generation order.
    out.sort_by_key(|fragment| fragment.mass);
    out
}

/// Masses of every contiguous sub-sequence, including the empty one and the full peptide.
pub fn linear_spectrum(peptide: &Peptide) -> Spectrum {
    masses(peptide, false)
}

/// The linear spectrum extended with wrap-around fragments of the circular peptide.
pub fn cyclic_spectrum(peptide: &Peptide) -> Spectrum {
    masses(peptide, true)
}

pub fn linear_fragments(peptide: &Peptide) -> Vec<Fragment> {
    fragments(peptide, false)
}

pub fn cyclic_fragments(peptide: &Peptide) -> Vec<Fragment> {
    fragments(peptide, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peptide(s: &str) -> Peptide {
        s.parse().unwrap()
    }

    #[test]
    fn linear_spectrum_of_known_peptide() {
        // N=114, Q=128, E=129, L=113
        let spectrum = linear_spectrum(&peptide("NQEL"));
        assert_eq!(
            spectrum.masses(),
            &[0, 113, 114, 128, 129, 242, 242, 257, 370, 371, 484]
        );
    }

    #[test]
    fn cyclic_spectrum_of_known_peptide() {
        let spectrum = cyclic_spectrum(&peptide("LEQN"));
        assert_eq!(
            spectrum.masses(),
            &[
                0, 113, 114, 128, 129, 227, 242, 242, 257, 355, 356, 370, 371, 484
            ]
        );
    }

    #[test]
    fn empty_peptide_has_only_the_zero_mass() {
        assert_eq!(linear_spectrum(&Peptide::empty()).masses(), &[0]);
        assert_eq!(cyclic_spectrum(&Peptide::empty()).masses(), &[0]);
    }

    #[test]
    fn spectrum_sizes_follow_fragment_counts() {
        for seq in ["G", "GA", "GAS", "GASP", "WYRFHM", "LLLLLLLL"] {
            let n = seq.len();
            let p = peptide(seq);
            assert_eq!(linear_spectrum(&p).len(), 1 + n * (n + 1) / 2, "{seq}");
            assert_eq!(cyclic_spectrum(&p).len(), 2 + n * (n - 1), "{seq}");
        }
    }

    #[test]
    fn cyclic_spectrum_is_rotation_invariant() {
        let p = peptide("NQELWY");
        let expected = cyclic_spectrum(&p);
        for offset in 1..p.len() {
            assert_eq!(cyclic_spectrum(&p.rotated(offset)), expected);
        }
    }

    #[test]
    fn linear_spectrum_is_not_rotation_invariant() {
        let p = peptide("GAW");
        assert_ne!(linear_spectrum(&p), linear_spectrum(&p.rotated(1)));
    }

    #[test]
    fn spectra_contain_zero_and_total_mass() {
        let p = peptide("KQEW");
        for spectrum in [linear_spectrum(&p), cyclic_spectrum(&p)] {
            assert_eq!(spectrum.first(), Some(&0));
            assert_eq!(spectrum.last(), Some(&p.mass()));
        }
    }

    #[test]
    fn fragments_match_plain_spectrum_masses() {
        let p = peptide("GASPV");
        let masses: Vec<u32> = cyclic_fragments(&p).iter().map(|f| f.mass).collect();
        assert_eq!(masses, cyclic_spectrum(&p).into_inner());
        let masses: Vec<u32> = linear_fragments(&p).iter().map(|f| f.mass).collect();
        assert_eq!(masses, linear_spectrum(&p).into_inner());
    }

    #[test]
    fn wrap_around_fragments_are_annotated_with_their_subpeptide() {
        // I=113, K=128, W=186: the only wrap-around fragment of a tripeptide is W+I.
        let fragments = cyclic_fragments(&peptide("IKW"));
        let wrap = fragments
            .iter()
            .find(|f| f.mass == 299)
            .expect("wrap-around fragment present");
        assert_eq!(wrap.subpeptide, "WI");
        assert_eq!((wrap.start, wrap.length), (2, 2));
        assert_eq!(fragments[0].subpeptide, "");
        assert_eq!(fragments.last().map(|f| f.subpeptide.as_str()), Some("IKW"));
    }
}
