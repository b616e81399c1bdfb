//! Material records and the heat properties attached to them.

use serde::de::{self, Deserialize, Deserializer};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Key holding the material name in every record
pub const NAME_KEY: &str = "name";

/// Annotation keys written by the annotator
pub const IGNITION_TEMPERATURE_KEY: &str = "ignition_temperature";
pub const MELTING_TEMPERATURE_KEY: &str = "melting_temperature";
pub const THERMAL_CONDUCTIVITY_KEY: &str = "thermal_conductivity";
pub const COMBUSTION_TYPE_KEY: &str = "combustion_type";

/// Temperature (K) meaning "this transition does not happen in the simulated range"
pub const NO_TRANSITION_K: f64 = 1_000_000.0;

/// The only combustion type produced for classified materials
pub const COMBUSTION: &str = "Combustion";

/// Heat-related properties assigned to a material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatProperties {
    /// Ignition temperature in kelvin
    pub ignition_temperature: f64,

    /// Melting temperature in kelvin
    pub melting_temperature: f64,

    /// Thermal conductivity in W/(m·K)
    pub thermal_conductivity: f64,

    /// Combustion type written to `combustion_type`
    pub combustion_type: &'static str,
}

impl HeatProperties {
    /// Properties for a combustible material
    pub const fn combustion(ignition: f64, melting: f64, conductivity: f64) -> Self {
        Self {
            ignition_temperature: ignition,
            melting_temperature: melting,
            thermal_conductivity: conductivity,
            combustion_type: COMBUSTION,
        }
    }

    /// True when the material never ignites in the simulated range
    pub fn never_ignites(&self) -> bool {
        self.ignition_temperature >= NO_TRANSITION_K
    }

    /// True when the material chars or decomposes rather than melting
    pub fn never_melts(&self) -> bool {
        self.melting_temperature >= NO_TRANSITION_K
    }
}

/// A single material: a JSON object with at least a string `name`.
///
/// All other fields are carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialRecord {
    fields: Map<String, Value>,
}

impl MaterialRecord {
    /// Build a record from a JSON object, requiring a string `name`
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, String> {
        match fields.get(NAME_KEY) {
            Some(Value::String(_)) => Ok(Self { fields }),
            Some(other) => Err(format!(
                "material \"name\" must be a string, found {}",
                json_kind(other)
            )),
            None => Err("material record has no \"name\" field".to_string()),
        }
    }

    /// Material name
    pub fn name(&self) -> &str {
        self.fields
            .get(NAME_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Look up any field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields of the record
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Write the four annotation fields, overwriting existing values
    pub fn apply(&mut self, props: &HeatProperties) {
        self.fields.insert(
            IGNITION_TEMPERATURE_KEY.to_string(),
            Value::from(props.ignition_temperature),
        );
        self.fields.insert(
            MELTING_TEMPERATURE_KEY.to_string(),
            Value::from(props.melting_temperature),
        );
        self.fields.insert(
            THERMAL_CONDUCTIVITY_KEY.to_string(),
            Value::from(props.thermal_conductivity),
        );
        self.fields.insert(
            COMBUSTION_TYPE_KEY.to_string(),
            Value::from(props.combustion_type),
        );
    }
}

impl<'de> Deserialize<'de> for MaterialRecord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        MaterialRecord::from_fields(fields).map_err(de::Error::custom)
    }
}

impl Serialize for MaterialRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.fields.serialize(serializer)
    }
}

/// Ordered list of materials, as stored in a material file
#[derive(Debug, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct MaterialCollection {
    pub records: Vec<MaterialRecord>,
}

impl MaterialCollection {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialRecord> {
        self.records.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut MaterialRecord> {
        self.records.iter_mut()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
