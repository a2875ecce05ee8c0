use super::{ArmCfg, CliErr};
use scara::{
    csv::{dump_csv, parse_csv},
    ManipulatorGeometry,
};
use std::path::PathBuf;

#[derive(clap::Args)]
pub(super) struct Ik {
    #[clap(flatten)]
    pub(super) cfg: ArmCfg,
    /// Target X position
    #[clap(
        allow_negative_numbers = true,
        required_unless_present = "points",
        conflicts_with = "points",
        requires = "y"
    )]
    pub(super) x: Option<f64>,
    /// Target Y position
    #[clap(allow_negative_numbers = true)]
    pub(super) y: Option<f64>,
    /// Headerless CSV file of "X,Y" targets, output as CSV
    #[clap(long)]
    pub(super) points: Option<PathBuf>,
}

#[derive(serde::Serialize)]
struct IkRow {
    x: f64,
    y: f64,
    theta1: f64,
    theta2: f64,
}

pub(super) fn ik(ik: Ik) -> Result<(), CliErr> {
    let Ik { cfg, x, y, points } = ik;
    let geo = cfg.load()?;
    if let (Some(x), Some(y)) = (x, y) {
        let [theta1, theta2] = geo.inverse(x, y)?;
        println!("theta1={}", cfg.unit(theta1));
        println!("theta2={}", cfg.unit(theta2));
        return Ok(());
    }
    let Some(path) = points else {
        return Ok(());
    };
    let targets = parse_csv::<[f64; 2], _>(std::fs::File::open(path)?)?;
    log::info!("solving {} targets", targets.len());
    let rows = solve_all(&geo, &cfg, targets);
    dump_csv(std::io::stdout().lock(), rows)?;
    Ok(())
}

fn solve_all<'a>(
    geo: &'a ManipulatorGeometry,
    cfg: &'a ArmCfg,
    targets: Vec<[f64; 2]>,
) -> impl Iterator<Item = IkRow> + 'a {
    targets
        .into_iter()
        .filter_map(move |[x, y]| match geo.inverse(x, y) {
            Ok([theta1, theta2]) => Some(IkRow {
                x,
                y,
                theta1: cfg.unit(theta1),
                theta2: cfg.unit(theta2),
            }),
            Err(e) => {
                log::warn!("skip ({x}, {y}): {e}");
                None
            }
        })
}
