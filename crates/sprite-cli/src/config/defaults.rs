pub struct DefaultsConfig {
    pub keep_best: usize,
    pub max_combinations: Option<u64>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            keep_best: 10,
            max_combinations: None,
        }
    }
}
