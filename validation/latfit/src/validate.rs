use latfit::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<f64>,
    y: Vec<f64>,
    #[serde(default)]
    sigma: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    degree: usize,
    #[serde(default)]
    fixed: Vec<usize>,
    #[serde(default)]
    initial: Option<Vec<f64>>,
    #[serde(default = "default_ncol")]
    ncol: usize,
}

fn default_ncol() -> usize {
    20
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    moments: Option<MomentsData>,
    line: Option<LineData>,
    params: Vec<f64>,
    errors: Vec<f64>,
    chi2: f64,
    density: Vec<f64>,
    error: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct MomentsData {
    mean: f64,
    adev: f64,
    sdev: f64,
    variance: f64,
    skew: f64,
    curt: f64,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct LineData {
    a: f64,
    b: f64,
    siga: f64,
    sigb: f64,
    chi2: f64,
    sigdat: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let input_dir = Path::new("../output/reference");
    let output_dir = Path::new("../output/latfit");

    if !input_dir.exists() {
        eprintln!(
            "Input directory {:?} does not exist. Generate reference cases first.",
            input_dir
        );
        return Ok(());
    }

    fs::create_dir_all(output_dir)?;

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("json") {
            println!("Processing {:?}", path.file_name().unwrap_or_default());
            process_file(&path, output_dir)?;
        }
    }

    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<(), Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;

    // Degenerate cases are part of the reference set; record the error
    // instead of aborting the run.
    if let Err(err) = fill_result(&mut data) {
        data.result.error = Some(err.to_string());
    }

    let file_name = input_path.file_name().ok_or("input path has no file name")?;
    let output_path = output_dir.join(file_name);
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_path, output_json)?;

    Ok(())
}

fn fill_result(data: &mut ValidationData) -> Result<(), FitError> {
    let (x, y) = (&data.input.x, &data.input.y);

    let m = Moments::compute(y)?;
    data.result.moments = Some(MomentsData {
        mean: m.mean,
        adev: m.adev,
        sdev: m.sdev,
        variance: m.variance,
        skew: m.skew,
        curt: m.curt,
    });

    let line = LinearFit::fit(x, y)?;
    data.result.line = Some(LineData {
        a: line.a,
        b: line.b,
        siga: line.siga,
        sigb: line.sigb,
        chi2: line.chi2,
        sigdat: line.sigdat,
    });

    let mut builder = match &data.params.initial {
        Some(initial) => Lfit::new().parameters(initial.clone()),
        None => Lfit::new().polynomial(data.params.degree),
    };
    for &i in &data.params.fixed {
        builder = builder.fix(i);
    }
    if let Some(sigma) = &data.input.sigma {
        builder = builder.sigma(sigma.clone());
    }
    let fit = builder.build()?.fit_polynomial(x, y)?;
    data.result.errors = fit.standard_errors();
    data.result.params = fit.params;
    data.result.chi2 = fit.chi2;

    data.result.density = Histogram::build(y, data.params.ncol)?.density;

    Ok(())
}
