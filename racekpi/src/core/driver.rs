use serde::Deserialize;

/// * `name` - Driver name, e.g. Max Verstappen
/// * `age` - Driver age in years
#[derive(Debug, Deserialize, Clone)]
pub struct DriverRecord {
    name: String,
    age: u32,
}

impl DriverRecord {
    pub fn new(name: &str, age: u32) -> DriverRecord {
        DriverRecord {
            name: name.to_owned(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}
