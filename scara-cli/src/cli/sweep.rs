use super::{parse_point, ArmCfg, CliErr};
use scara::{csv::dump_csv, Coord, JointAdapter, JointSelector, Move, Trajectory as _};

#[derive(clap::Args)]
pub(super) struct Sweep {
    #[clap(flatten)]
    pub(super) cfg: ArmCfg,
    /// Start point "X,Y"
    #[clap(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub(super) from: [f64; 2],
    /// End point "X,Y"
    #[clap(long, value_parser = parse_point, allow_hyphen_values = true)]
    pub(super) to: [f64; 2],
    /// Move velocity
    #[clap(long, default_value_t = 10.)]
    pub(super) velocity: f64,
    /// Number of sample intervals
    #[clap(long, default_value_t = 100)]
    pub(super) samples: usize,
    /// Only output one joint, `a` or `b`
    #[clap(long)]
    pub(super) joint: Option<char>,
}

#[derive(serde::Serialize, Debug, PartialEq)]
struct SweepRow {
    time: f64,
    x: f64,
    y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    theta1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    theta2: Option<f64>,
}

pub(super) fn sweep(sweep: Sweep) -> Result<(), CliErr> {
    let geo = sweep.cfg.load()?;
    let adapters = match sweep.joint {
        Some(code) => vec![geo.adapter(JointSelector::try_from(code)?)],
        None => geo.adapters().to_vec(),
    };
    let m = Move::linear(sweep.from, sweep.to, sweep.velocity);
    let times = sample_times(m.move_t, sweep.samples);
    log::info!("sampling {} points in {:.4}s", times.len(), m.move_t);
    let rows = sample(&m, &adapters, &sweep.cfg, &times);
    dump_csv(std::io::stdout().lock(), rows)?;
    Ok(())
}

/// Evenly spaced times over `[0, move_t]`, with at least one interval.
fn sample_times(move_t: f64, samples: usize) -> Vec<f64> {
    let samples = samples.max(1);
    (0..=samples)
        .map(|i| move_t * i as f64 / samples as f64)
        .collect()
}

fn sample(m: &Move, adapters: &[JointAdapter], cfg: &ArmCfg, times: &[f64]) -> Vec<SweepRow> {
    let mut rows = Vec::with_capacity(times.len());
    'sample: for &time in times {
        let Coord { x, y, .. } = m.coord_at(time);
        let mut row = SweepRow { time, x, y, theta1: None, theta2: None };
        for adapter in adapters {
            let theta = match adapter.calc_position(m, time) {
                Ok(theta) => cfg.unit(theta),
                Err(e) => {
                    log::warn!("skip t={time:.4}: {e}");
                    continue 'sample;
                }
            };
            match adapter.selector() {
                JointSelector::First => row.theta1 = Some(theta),
                JointSelector::Second => row.theta2 = Some(theta),
            }
        }
        rows.push(row);
    }
    rows
}
