/*!

  Utils for nandsmith development.

*/

/// Compare netlist documents as strings up to indentation.
#[macro_export]
macro_rules! assert_netlist_eq {
    ($left:expr, $right:expr $(,)?) => {
        match (&$left, &$right) {
            (left_val, right_val) => {
                assert_eq!(
                    left_val.lines().count(),
                    right_val.lines().count(),
                    "line counts differ"
                );
                for (left_line, right_line) in left_val.lines().zip(right_val.lines()) {
                    assert_eq!(left_line.trim(), right_line.trim());
                }
            }
        }
    };
}
