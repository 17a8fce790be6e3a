use chrono::NaiveDate;
use summa_core::{MISSING_VALUE, SummaError};

const H: f64 = MISSING_VALUE;

pub struct Case {
    pub dates: &'static [&'static str],
    pub vectors: &'static [(&'static str, &'static [f64])],
}

static BASE: Case = Case {
    dates: &[
        "2020-01-01",
        "2020-02-01",
        "2020-03-01",
        "2020-04-01",
        "2020-05-01",
    ],
    vectors: &[
        ("FOPT", &[0.0, 1000.0, 2100.0, 3300.0, 4600.0]),
        ("FOPR", &[33.3, 35.5, 38.7, 43.3, 40.0]),
        ("FWCT", &[0.0, 0.02, 0.05, 0.09, 0.14]),
        ("WOPR:OP_1", &[10.0, 12.0, H, 15.0, 14.0]),
    ],
};

// Denser and longer than BASE, sampled on different days.
static PRED: Case = Case {
    dates: &[
        "2020-01-01",
        "2020-01-16",
        "2020-02-15",
        "2020-03-16",
        "2020-04-15",
        "2020-06-01",
    ],
    vectors: &[
        ("FOPT", &[0.0, 480.0, 1500.0, 2550.0, 3700.0, 5200.0]),
        ("FOPR", &[32.0, 33.0, 35.0, 38.0, 40.0, 42.0]),
        ("FWCT", &[0.0, 0.01, 0.03, 0.06, 0.1, 0.16]),
        ("WGPR:OP_2", &[120.0, 118.0, 117.5, 115.0, 111.0, 109.0]),
    ],
};

// Ends before BASE starts.
static HIST: Case = Case {
    dates: &["2019-06-01", "2019-09-01", "2019-12-01"],
    vectors: &[
        ("FOPT", &[0.0, 300.0, 700.0]),
        ("FOPR", &[3.3, 4.4, 5.0]),
    ],
};

pub fn by_case(name: &str) -> Option<&'static Case> {
    match name {
        "BASE" => Some(&BASE),
        "PRED" => Some(&PRED),
        "HIST" => Some(&HIST),
        _ => None,
    }
}

impl Case {
    pub fn values(&self, vector: &str) -> Option<&'static [f64]> {
        self.vectors
            .iter()
            .find(|(name, _)| *name == vector)
            .map(|(_, v)| *v)
    }

    pub fn time_steps(&self) -> Result<Vec<i64>, SummaError> {
        self.dates
            .iter()
            .map(|d| {
                NaiveDate::parse_from_str(d, "%Y-%m-%d")
                    .map(|date| date.and_time(chrono::NaiveTime::MIN).and_utc().timestamp())
                    .map_err(|e| SummaError::Data(format!("fixture date {d}: {e}")))
            })
            .collect()
    }
}
