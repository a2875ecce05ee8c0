use scara::ManipulatorGeometry;
use std::path::{Path, PathBuf};

mod ik;
mod sweep;

const APP_NAME: &str = env!("CARGO_BIN_NAME");

#[derive(clap::Parser)]
#[clap(name = APP_NAME, version, author, about)]
pub(crate) struct Entry {
    #[clap(subcommand)]
    cmd: Cmd,
}

#[derive(clap::Subcommand)]
enum Cmd {
    /// Solve the joint angles of target points
    Ik(ik::Ik),
    /// Sample the joint angles along a linear move
    Sweep(sweep::Sweep),
}

impl Entry {
    pub(crate) fn main() -> Result<(), CliErr> {
        let entry = <Self as clap::Parser>::parse_from(wild::args());
        match entry.cmd {
            Cmd::Ik(ik) => ik::ik(ik),
            Cmd::Sweep(sweep) => sweep::sweep(sweep),
        }
    }
}

#[derive(clap::Args)]
struct ArmCfg {
    /// Arm geometry file in RON format, e.g. `(arm_a: 50.0, arm_b: 50.0)`
    #[clap(long)]
    arm: PathBuf,
    /// Output angles in degrees
    #[clap(long)]
    deg: bool,
}

impl ArmCfg {
    fn load(&self) -> Result<ManipulatorGeometry, CliErr> {
        let geo = load_arm(&self.arm)?;
        let [inner, outer] = geo.reach();
        log::info!(
            "arm_a={}, arm_b={}, reach={inner}..={outer}",
            geo.arm_a(),
            geo.arm_b()
        );
        Ok(geo)
    }

    fn unit(&self, a: f64) -> f64 {
        if self.deg {
            a.to_degrees()
        } else {
            a
        }
    }
}

fn load_arm(path: &Path) -> Result<ManipulatorGeometry, CliErr> {
    let s = std::fs::read_to_string(path)?;
    Ok(ron::from_str(&s)?)
}

fn parse_point(s: &str) -> Result<[f64; 2], String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expect \"X,Y\", got {s:?}"))?;
    let parse = |v: &str| v.trim().parse::<f64>().map_err(|e| format!("{v:?}: {e}"));
    Ok([parse(x)?, parse(y)?])
}

pub(crate) enum CliErr {
    // Reading or writing file error
    Io(std::io::Error),
    // Config deserialization error
    Ron(ron::error::SpannedError),
    // CSV error
    Csv(csv::Error),
    // Invalid arm or joint
    Arm(scara::Error),
}

impl std::fmt::Display for CliErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "file error: {e}"),
            Self::Ron(e) => write!(f, "ron deserialization error: {e}"),
            Self::Csv(e) => write!(f, "csv error: {e}"),
            Self::Arm(e) => write!(f, "{e}"),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $var:ident),+ $(,)?) => {$(
        impl From<$ty> for CliErr {
            fn from(e: $ty) -> Self {
                Self::$var(e)
            }
        }
    )+};
}

impl_from!(
    std::io::Error => Io,
    ron::error::SpannedError => Ron,
    csv::Error => Csv,
    scara::Error => Arm,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arg() {
        assert_eq!(parse_point("70,0"), Ok([70., 0.]));
        assert_eq!(parse_point("-30, -40.5"), Ok([-30., -40.5]));
        assert!(parse_point("70").is_err());
        assert!(parse_point("x,1").is_err());
    }

    #[test]
    fn entry_args() {
        use clap::Parser as _;
        let entry = Entry::try_parse_from([
            APP_NAME, "sweep", "--arm", "arm.ron", "--from", "-30,40", "--to", "50,0",
            "--joint", "b",
        ])
        .unwrap();
        let Cmd::Sweep(sweep) = entry.cmd else {
            panic!("expect sweep");
        };
        assert_eq!(sweep.from, [-30., 40.]);
        assert_eq!(sweep.joint, Some('b'));
        assert!(Entry::try_parse_from([APP_NAME, "ik", "--arm", "arm.ron"]).is_err());
    }

    #[test]
    fn ik_args() {
        use clap::Parser as _;
        let parse = |args: &[&str]| {
            let head = [APP_NAME, "ik", "--arm", "arm.ron"];
            let entry = Entry::try_parse_from(head.iter().chain(args))?;
            let Cmd::Ik(ik) = entry.cmd else {
                panic!("expect ik");
            };
            Ok::<_, clap::Error>((ik.x, ik.y, ik.points))
        };
        assert_eq!(parse(&["70", "0"]).unwrap(), (Some(70.), Some(0.), None));
        assert_eq!(parse(&["-30", "-40.5"]).unwrap(), (Some(-30.), Some(-40.5), None));
        let (x, _, points) = parse(&["--points", "targets.csv"]).unwrap();
        assert_eq!((x, points), (None, Some(PathBuf::from("targets.csv"))));
        assert!(parse(&["70"]).is_err());
        assert!(parse(&["70", "0", "--points", "targets.csv"]).is_err());
    }
}
