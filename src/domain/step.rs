use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered configuration of a single step.
pub type StepOptions = IndexMap<String, Value>;

/// Named steps in insertion order.
pub type Steps = IndexMap<String, StepOptions>;

/// Anything that can export its configuration as an ordered map can be added
/// to an assembly as a step.
pub trait Step {
    fn to_options(&self) -> StepOptions;
}

impl Step for StepOptions {
    fn to_options(&self) -> StepOptions {
        self.clone()
    }
}

/// A step executed by a named robot, e.g. `/video/encode`.
///
/// The `robot` entry is always the first option, further options keep the
/// order in which they were set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RobotStep {
    options: StepOptions,
}

impl RobotStep {
    pub fn new(robot: impl Into<String>) -> Self {
        let mut options = StepOptions::new();
        options.insert("robot".to_string(), Value::String(robot.into()));
        Self { options }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_option(key, value);
        self
    }

    pub fn set_option(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.options.insert(key.into(), value.into());
    }

    pub fn robot(&self) -> Option<&str> {
        self.options.get("robot").and_then(Value::as_str)
    }

    pub fn option(&self, key: &str) -> Option<&Value> {
        self.options.get(key)
    }
}

impl Step for RobotStep {
    fn to_options(&self) -> StepOptions {
        self.options.clone()
    }
}

/// Returns a copy of `steps` with the iteration order reversed, so the most
/// recently added step comes first.
pub fn reverse_steps(steps: &Steps) -> Steps {
    steps
        .iter()
        .rev()
        .map(|(name, options)| (name.clone(), options.clone()))
        .collect()
}

/// Renders steps as the JSON object placed under `params.steps`.
pub fn steps_to_value(steps: &Steps) -> Value {
    let map: Map<String, Value> = steps
        .iter()
        .map(|(name, options)| {
            let options: Map<String, Value> = options
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            (name.clone(), Value::Object(options))
        })
        .collect();
    Value::Object(map)
}
