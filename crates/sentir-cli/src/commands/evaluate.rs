//! Evaluate command: k-fold cross-validation report per predictor.

use super::selected_indices;
use crate::error::Result;
use sentir::config::ToolkitConfig;
use sentir::evaluation::EvaluationResult;
use sentir::labels::Mode;
use sentir::toolkit::Toolkit;
use std::collections::BTreeMap;

pub(crate) fn run(
    config: ToolkitConfig,
    mode: Mode,
    sentence: &[usize],
    folds: Option<usize>,
    json: bool,
) -> Result<()> {
    let folds = folds.unwrap_or(config.folds);
    let mut toolkit = Toolkit::new(config, mode);
    let mut results: BTreeMap<String, EvaluationResult> = BTreeMap::new();

    for index in selected_indices(&toolkit, sentence) {
        let index = toolkit.select_sentence_level(index);
        let name = toolkit.sentence_level_name().to_string();
        let result = toolkit.evaluate(folds)?;
        if !json {
            println!("{index} => {name} ({folds} folds)");
            println!("{result}");
        }
        results.insert(name, result);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }
    Ok(())
}
