/*!
 * Data Structures
 *
 * Specialized value types shared by the simulator:
 * - Inline strings for process ids and short diagnostic text
 */

mod inline_string;

pub use inline_string::InlineString;
