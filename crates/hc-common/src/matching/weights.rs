/// Component weights for the four scoring factors.
/// Skills carry the most signal for referral-quality matches; seniority is
/// second; industry and location/language split the remainder evenly.
pub const MATCH_WEIGHTS: Weights = Weights {
    seniority: 0.25,
    skills: 0.35,
    industry: 0.20,
    location_language: 0.20,
};

#[derive(Debug, Clone, Copy)]
pub struct Weights {
    pub seniority: f64,
    pub skills: f64,
    pub industry: f64,
    pub location_language: f64,
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.seniority + self.skills + self.industry + self.location_language
    }
}
