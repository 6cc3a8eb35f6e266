use math::Field;
use num_bigint::BigUint;
use num_traits::Num;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use shamir::{
    generate_coefficients, generate_shares, polynomial_for_secret,
    reconstruct, reconstruct_with_threshold, select_abscissas, AbscissaMode,
    Share, ShamirError,
};

/// 2^256 - 2^32 - 977, the secp256k1 base field prime.
fn field_256() -> Field {
    let prime = BigUint::from_str_radix(
        "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
        16,
    )
    .unwrap();
    Field::new(prime).unwrap()
}

/// All size-k index subsets of 0..n.
fn subsets(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(k);
    fn walk(
        start: usize,
        n: usize,
        k: usize,
        current: &mut Vec<usize>,
        out: &mut Vec<Vec<usize>>,
    ) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            walk(i + 1, n, k, current, out);
            current.pop();
        }
    }
    walk(0, n, k, &mut current, &mut out);
    out
}

fn pick(shares: &[Share], indices: &[usize]) -> Vec<Share> {
    indices.iter().map(|&i| shares[i].clone()).collect()
}

#[test]
fn every_threshold_subset_recovers_the_secret() {
    let field = field_256();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    let threshold = 3;
    let share_count = 5;

    let polynomial =
        generate_coefficients(threshold, &field, &mut rng).unwrap();
    let abscissas = select_abscissas(
        share_count,
        &field,
        AbscissaMode::Sequential,
        &mut rng,
    )
    .unwrap();
    let shares = generate_shares(&polynomial, &abscissas, &field).unwrap();
    assert_eq!(shares.len(), share_count);

    let secret = polynomial.secret().unwrap();
    for indices in subsets(share_count, threshold) {
        let subset = pick(&shares, &indices);
        assert_eq!(&reconstruct(&subset, &field).unwrap(), secret);
    }
}

#[test]
fn different_subsets_agree_with_each_other() {
    let field = field_256();
    let mut rng = ChaCha20Rng::seed_from_u64(2);

    let polynomial = generate_coefficients(4, &field, &mut rng).unwrap();
    let abscissas =
        select_abscissas(7, &field, AbscissaMode::Sequential, &mut rng)
            .unwrap();
    let shares = generate_shares(&polynomial, &abscissas, &field).unwrap();

    let first = reconstruct(&pick(&shares, &[0, 1, 2, 3]), &field).unwrap();
    let second = reconstruct(&pick(&shares, &[3, 4, 5, 6]), &field).unwrap();
    let third = reconstruct(&pick(&shares, &[0, 2, 4, 6]), &field).unwrap();
    assert_eq!(first, second);
    assert_eq!(second, third);
    assert_eq!(Some(&first), polynomial.secret());
}

#[test]
fn random_abscissas_round_trip() {
    let field = field_256();
    let mut rng = ChaCha20Rng::seed_from_u64(3);

    let polynomial = generate_coefficients(3, &field, &mut rng).unwrap();
    let abscissas =
        select_abscissas(5, &field, AbscissaMode::Random, &mut rng).unwrap();
    let shares = generate_shares(&polynomial, &abscissas, &field).unwrap();

    let secret = reconstruct(&shares[1..4], &field).unwrap();
    assert_eq!(Some(&secret), polynomial.secret());
}

#[test]
fn caller_supplied_secret_round_trips() {
    let field = field_256();
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    let secret = BigUint::from(0xdead_beef_cafe_f00du64);

    let polynomial =
        polynomial_for_secret(&secret, 2, &field, &mut rng).unwrap();
    let abscissas =
        select_abscissas(3, &field, AbscissaMode::Sequential, &mut rng)
            .unwrap();
    let shares = generate_shares(&polynomial, &abscissas, &field).unwrap();

    let recovered =
        reconstruct_with_threshold(&shares[..2], &field, 2).unwrap();
    assert_eq!(recovered, secret);
}

#[test]
fn more_than_threshold_shares_still_reconstruct_exactly() {
    let field = field_256();
    let mut rng = ChaCha20Rng::seed_from_u64(5);

    let polynomial = generate_coefficients(2, &field, &mut rng).unwrap();
    let abscissas =
        select_abscissas(6, &field, AbscissaMode::Sequential, &mut rng)
            .unwrap();
    let shares = generate_shares(&polynomial, &abscissas, &field).unwrap();

    let from_all = reconstruct(&shares, &field).unwrap();
    assert_eq!(Some(&from_all), polynomial.secret());
}

#[test]
fn forged_duplicate_share_is_detected_not_misreconstructed() {
    let field = field_256();
    let mut rng = ChaCha20Rng::seed_from_u64(6);

    let polynomial = generate_coefficients(2, &field, &mut rng).unwrap();
    let abscissas =
        select_abscissas(3, &field, AbscissaMode::Sequential, &mut rng)
            .unwrap();
    let mut shares =
        generate_shares(&polynomial, &abscissas, &field).unwrap();

    // Resubmitting share 0 under a forged y keeps its abscissa
    shares[1] = Share::new(shares[0].x.clone(), BigUint::from(99u32));
    let result = reconstruct(&shares[..2], &field);
    assert!(matches!(result, Err(ShamirError::Arithmetic(_))));
}

#[test]
fn generation_phases_are_stateless_and_repeatable() {
    let field = field_256();
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    let polynomial = generate_coefficients(3, &field, &mut rng).unwrap();
    let abscissas =
        select_abscissas(4, &field, AbscissaMode::Sequential, &mut rng)
            .unwrap();

    // Splitting twice from one polynomial is a pure function of inputs
    let first = generate_shares(&polynomial, &abscissas, &field).unwrap();
    let second = generate_shares(&polynomial, &abscissas, &field).unwrap();
    assert_eq!(first, second);

    // And both share sets reconstruct to the same secret
    let a = reconstruct(&first[..3], &field).unwrap();
    let b = reconstruct(&second[1..4], &field).unwrap();
    assert_eq!(a, b);
}
