use rand::{rngs::StdRng, Rng, SeedableRng};
use total_power::{all_sequences, find_total_power, find_total_power_naive};
use total_power_macros::equivalence_test;

equivalence_test!(1);
equivalence_test!(2);
equivalence_test!(3);
equivalence_test!(4);
equivalence_test!(5);
equivalence_test!(6);
equivalence_test!(7);

fn equivalence_test(sequence_len: usize) {
    for sequence in all_sequences(sequence_len, sequence_len, 3) {
        assert_eq!(
            find_total_power(&sequence),
            find_total_power_naive(&sequence),
            "Equivalence failed for {:?}",
            sequence
        );
    }
}

#[test]
fn random_large_values_match_naive() {
    let mut rng = StdRng::seed_from_u64(0x707a1);
    for _ in 0..50 {
        let len = rng.gen_range(0..=200);
        let sequence: Vec<u32> = (0..len).map(|_| rng.gen_range(0..=1_000_000_000)).collect();
        assert_eq!(
            find_total_power(&sequence),
            find_total_power_naive(&sequence),
            "Equivalence failed for seed sequence of length {}",
            len
        );
    }
}

#[test]
fn random_small_values_match_naive() {
    let mut rng = StdRng::seed_from_u64(0x707a2);
    for _ in 0..200 {
        let len = rng.gen_range(0..=40);
        let sequence: Vec<u32> = (0..len).map(|_| rng.gen_range(0..=5)).collect();
        assert_eq!(
            find_total_power(&sequence),
            find_total_power_naive(&sequence),
            "Equivalence failed for {:?}",
            sequence
        );
    }
}
