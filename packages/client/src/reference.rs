use iris_model::{FeatureVector, N_FEATURES};

/// Published per-species mean measurements in centimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesMean {
    pub name: &'static str,
    pub values: [f64; N_FEATURES],
}

pub const SPECIES_MEANS: [SpeciesMean; 3] = [
    SpeciesMean {
        name: "Setosa",
        values: [5.0, 3.4, 1.5, 0.2],
    },
    SpeciesMean {
        name: "Versicolor",
        values: [5.9, 2.8, 4.2, 1.3],
    },
    SpeciesMean {
        name: "Virginica",
        values: [6.5, 3.0, 5.6, 2.0],
    },
];

impl SpeciesMean {
    pub fn distance(&self, features: &FeatureVector) -> f64 {
        self.values
            .iter()
            .zip(features.values())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }
}

/// Species whose mean lies closest in Euclidean distance. Ties keep the
/// earlier entry.
pub fn nearest_species(features: &FeatureVector) -> &'static SpeciesMean {
    let mut best = &SPECIES_MEANS[0];
    let mut best_distance = best.distance(features);
    for mean in &SPECIES_MEANS[1..] {
        let distance = mean.distance(features);
        if distance < best_distance {
            best = mean;
            best_distance = distance;
        }
    }
    best
}
