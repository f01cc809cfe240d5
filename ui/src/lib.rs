//! Browser enhancements for the Examboard student pages: password show/hide
//! toggles and the score progress chart.

pub mod chart;
pub mod core;
pub mod i18n;
pub mod page;
pub mod password;
