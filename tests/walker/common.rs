use hyperwalk::builder::{BuilderFactory, FnBuilderFactory};
use hyperwalk::parameter::Dimension;
use hyperwalk::space::HyperParameterSpace;
use hyperwalk::{Error, ParamValue, Result};

/// A model configuration with a handful of tunable fields.
#[derive(Clone, Debug, PartialEq)]
pub struct GlmParams {
    pub alpha: f64,
    pub lambda: f64,
    pub max_iterations: i64,
    pub standardize: bool,
    pub solver: String,
}

impl Default for GlmParams {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            lambda: 1e-5,
            max_iterations: 100,
            standardize: true,
            solver: "auto".to_string(),
        }
    }
}

impl GlmParams {
    pub fn field(&self, name: &str) -> ParamValue {
        match name {
            "alpha" => ParamValue::Float(self.alpha),
            "lambda" => ParamValue::Float(self.lambda),
            "max_iterations" => ParamValue::Int(self.max_iterations),
            "standardize" => ParamValue::Bool(self.standardize),
            "solver" => ParamValue::Categorical(self.solver.clone()),
            _ => panic!("unknown field {name}"),
        }
    }
}

fn apply(p: &mut GlmParams, name: &str, value: &ParamValue) -> Result<()> {
    let wrong_type = || Error::invalid_value(name, format!("unexpected {} value", value.kind()));
    match name {
        "alpha" => {
            let alpha = value.as_f64().ok_or_else(wrong_type)?;
            if !(0.0..=1.0).contains(&alpha) {
                return Err(Error::invalid_value(name, "alpha must be in [0, 1]"));
            }
            p.alpha = alpha;
        }
        "lambda" => p.lambda = value.as_f64().ok_or_else(wrong_type)?,
        "max_iterations" => p.max_iterations = value.as_i64().ok_or_else(wrong_type)?,
        "standardize" => p.standardize = value.as_bool().ok_or_else(wrong_type)?,
        "solver" => p.solver = value.as_str().ok_or_else(wrong_type)?.to_string(),
        _ => return Err(Error::UnknownParameter(name.to_string())),
    }
    Ok(())
}

pub fn glm_factory() -> impl BuilderFactory<Config = GlmParams> {
    FnBuilderFactory::new(apply)
}

pub fn glm_space() -> HyperParameterSpace {
    HyperParameterSpace::builder()
        .dimension(Dimension::floats("alpha", [0.0, 0.5, 1.0]))
        .dimension(Dimension::floats("lambda", [1e-3, 1e-1]))
        .dimension(Dimension::bools("standardize"))
        .dimension(Dimension::categorical("solver", ["irlsm", "l_bfgs"]))
        .build()
        .unwrap()
}

/// A space of integer dimensions `d0, d1, ...` whose values equal their indices.
pub fn index_space(sizes: &[usize]) -> HyperParameterSpace {
    let mut builder = HyperParameterSpace::builder();
    for (d, &n) in sizes.iter().enumerate() {
        builder = builder.values(format!("d{d}"), (0..n as i64).collect::<Vec<_>>());
    }
    builder.build().unwrap()
}

/// A factory whose configuration is the list of integer overrides received.
pub fn index_factory() -> impl BuilderFactory<Config = Vec<usize>> {
    FnBuilderFactory::new(|c: &mut Vec<usize>, name: &str, value: &ParamValue| {
        let index = value
            .as_i64()
            .ok_or_else(|| Error::invalid_value(name, "expected int"))?;
        c.push(index as usize);
        Ok(())
    })
}
