use rand::seq::IndexedRandom;

/// Built-in product reviews offered when no text is supplied.
pub const SAMPLE_REVIEWS: [&str; 5] = [
    "This product is absolutely amazing! Fast shipping, great quality, and excellent customer service. Highly recommended!",
    "Terrible experience. The product broke after just one week and customer support was unhelpful. Complete waste of money.",
    "The product is okay. It works as expected but nothing special. Average quality for the price point.",
    "Outstanding! This exceeded all my expectations. The build quality is phenomenal and it arrived earlier than expected.",
    "Very disappointed. The description was misleading and the product doesn't match what was advertised online.",
];

pub fn random_sample() -> &'static str {
    SAMPLE_REVIEWS
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(SAMPLE_REVIEWS[0])
}
