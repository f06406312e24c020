use core::fmt::Display;

use log::*;

use crate::hardware::ErrorIndicator;

/// Tell the user the interpreter hit an unrecoverable fault.
///
/// The details only go to the log; the indicator just becomes visible.
pub fn report_fault(indicator: &mut impl ErrorIndicator, fault: &dyn Display) {
    error!("Interpreter fault: {}", fault);
    indicator.reveal();
}
