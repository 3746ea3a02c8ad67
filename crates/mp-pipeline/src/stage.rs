use std::fmt;
use std::time::Duration;

/// The five pipeline stages, in execution order.
///
/// Each stage ends with a join barrier: nothing from the next stage starts
/// until every thread of the current one has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Read A and B concurrently.
    ReadAB,
    /// D = A + B, fanned out over the row partitions.
    Sum,
    /// Write D while reading C.
    WriteDReadC,
    /// E = D * C, fanned out over the row partitions.
    Multiply,
    /// Write E while reducing it into the accumulator.
    WriteEReduce,
}

impl Stage {
    pub fn name(&self) -> &'static str {
        match self {
            Stage::ReadAB => "read A|B",
            Stage::Sum => "sum",
            Stage::WriteDReadC => "write D|read C",
            Stage::Multiply => "multiply",
            Stage::WriteEReduce => "write E|reduce",
        }
    }

    /// The stage that follows this one, or `None` after the last.
    pub fn next(&self) -> Option<Stage> {
        match self {
            Stage::ReadAB => Some(Stage::Sum),
            Stage::Sum => Some(Stage::WriteDReadC),
            Stage::WriteDReadC => Some(Stage::Multiply),
            Stage::Multiply => Some(Stage::WriteEReduce),
            Stage::WriteEReduce => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Wall-clock time of the three timed stages.
///
/// The reduce figure covers the whole write-E-and-reduce stage, since the
/// two run together. The read stages are not timed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StageTimings {
    pub sum: Duration,
    pub multiply: Duration,
    pub reduce: Duration,
}

impl StageTimings {
    pub fn total(&self) -> Duration {
        self.sum + self.multiply + self.reduce
    }
}

/// Final result of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineReport {
    /// Sum of every element of E.
    pub reduction: i64,
    pub timings: StageTimings,
}

impl fmt::Display for PipelineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let t = &self.timings;
        writeln!(f, "Reduction result: {}", self.reduction)?;
        writeln!(f, "Sum time: {:.6} seconds", t.sum.as_secs_f64())?;
        writeln!(f, "Multiply time: {:.6} seconds", t.multiply.as_secs_f64())?;
        writeln!(f, "Reduce time: {:.6} seconds", t.reduce.as_secs_f64())?;
        writeln!(f, "Total time: {:.3} seconds.", t.total().as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order() {
        let mut walked = vec![Stage::ReadAB];
        while let Some(next) = walked.last().and_then(|s| s.next()) {
            walked.push(next);
        }
        assert_eq!(
            walked,
            vec![
                Stage::ReadAB,
                Stage::Sum,
                Stage::WriteDReadC,
                Stage::Multiply,
                Stage::WriteEReduce,
            ]
        );
    }

    #[test]
    fn test_timings_total() {
        let t = StageTimings {
            sum: Duration::from_millis(10),
            multiply: Duration::from_millis(20),
            reduce: Duration::from_millis(5),
        };
        assert_eq!(t.total(), Duration::from_millis(35));
    }

    #[test]
    fn test_report_display() {
        let report = PipelineReport {
            reduction: 20,
            timings: StageTimings {
                sum: Duration::from_micros(1500),
                multiply: Duration::from_micros(250),
                reduce: Duration::from_micros(1),
            },
        };
        assert_eq!(
            report.to_string(),
            "Reduction result: 20\n\
             Sum time: 0.001500 seconds\n\
             Multiply time: 0.000250 seconds\n\
             Reduce time: 0.000001 seconds\n\
             Total time: 0.002 seconds.\n"
        );
    }
}
