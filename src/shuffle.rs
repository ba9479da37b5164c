use rand::Rng;

/// Fisher-Yates over a copy of `items`. The input is left untouched; the
/// returned order is uniform over permutations given a uniform source.
pub fn shuffled<T: Clone, R: Rng>(items: &[T], rng: &mut R) -> Vec<T> {
	let mut working = items.to_vec();

	for i in (1..working.len()).rev() {
		let j = rng.gen_range(0..=i);
		working.swap(i, j);
	}

	working
}
