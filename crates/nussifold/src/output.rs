//! Writing folding results.

use std::io::Write;
use serde::Serialize;

use nf_nussinov::NussinovDP;
use nf_structure::DotBracketVec;
use nf_structure::PairSet;

use crate::config::OutputFormat;
use crate::error::CliError;

/// Everything reported for one folded sequence.
#[derive(Debug, Clone, Serialize)]
pub struct FoldResult {
    pub sequence: String,
    pub length: usize,
    pub score: usize,
    pub pairs: Vec<(usize, usize)>,
    pub structure: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_structures: Option<Vec<String>>,
}

impl FoldResult {
    pub fn new(ndp: &NussinovDP, all_structures: bool) -> Self {
        let pairs: PairSet = ndp.get_max_pairs();
        let structure = DotBracketVec::from(&pairs).to_string();
        let all_structures = all_structures.then(|| {
            ndp.all_max_structs()
                .iter()
                .map(|s| s.to_string())
                .collect()
        });
        FoldResult {
            sequence: String::from_utf8_lossy(ndp.sequence()).into_owned(),
            length: ndp.len(),
            score: ndp.score(),
            pairs: pairs.to_vec()
                .iter()
                .map(|p| (p.i() as usize, p.j() as usize))
                .collect(),
            structure,
            all_structures,
        }
    }
}

pub fn write_result<W: Write>(
    writer: &mut W,
    result: &FoldResult,
    format: OutputFormat,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Text => write_text(writer, result)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, result)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn write_text<W: Write>(writer: &mut W, result: &FoldResult) -> std::io::Result<()> {
    writeln!(writer, "{}", result.pairs.len())?;
    for (i, j) in &result.pairs {
        write!(writer, "({i}, {j}) ")?;
    }
    writeln!(writer)?;
    writeln!(writer, "{}", result.structure)?;
    if let Some(all) = &result.all_structures {
        writeln!(writer, "# {} co-optimal structures", all.len())?;
        for s in all {
            writeln!(writer, "{s}")?;
        }
    }
    Ok(())
}
