//! Train command: fit predictors on the full corpus and cache them.

use super::selected_indices;
use crate::error::Result;
use sentir::config::ToolkitConfig;
use sentir::labels::Mode;
use sentir::toolkit::Toolkit;

pub(crate) fn run(config: ToolkitConfig, mode: Mode, sentence: &[usize]) -> Result<()> {
    let explicit = !sentence.is_empty();
    let mut toolkit = Toolkit::new(config, mode);

    for index in selected_indices(&toolkit, sentence) {
        let index = toolkit.select_sentence_level(index);
        let name = toolkit.sentence_level_name().to_string();
        if toolkit.train()? {
            println!("{index} => {name}: trained");
        } else if explicit {
            println!("{index} => {name}: nothing to train");
        }
    }
    Ok(())
}
