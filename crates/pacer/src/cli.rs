use clap::Parser;

#[derive(Clone, Debug, Parser)]
#[command(name = "pacer", version = env!("CARGO_PKG_VERSION"), about, long_about = None)]
pub struct App {
    /// Multiply every simulated delay by this factor (0 disables them)
    #[arg(long, value_name = "FACTOR", default_value_t = 1.0, value_parser = parse_speed)]
    pub speed: f64,

    /// Draw bars with ASCII characters only
    #[arg(long)]
    pub ascii: bool,
}

fn parse_speed(s: &str) -> Result<f64, String> {
    let speed: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if speed.is_finite() && speed >= 0.0 {
        Ok(speed)
    } else {
        Err("speed must be a finite, non-negative number".to_string())
    }
}
