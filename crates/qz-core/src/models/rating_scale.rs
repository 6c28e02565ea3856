/// Fixed option tokens of a RATING question, worst to best.
pub const RATING_SCALE: [&str; 5] = [
    "VERY_DISSATISFIED",
    "DISSATISFIED",
    "NEUTRAL",
    "SATISFACTORY",
    "VERY_SATISFACTORY",
];
