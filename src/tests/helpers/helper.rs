use crossbeam_channel::{unbounded, Receiver, Sender};

pub struct TestHelper;

impl TestHelper {
    pub fn tap() -> (Sender<String>, Receiver<String>) {
        unbounded()
    }

    // pulls the elapsed value out of "<label>: took <elapsed> seconds."
    pub fn elapsed_from(line: &str, label: &str) -> f64 {
        let prefix = format!("{}: took ", label);
        let value = line
            .strip_prefix(&prefix)
            .and_then(|rest| rest.strip_suffix(" seconds."))
            .unwrap_or_else(|| panic!("malformed report line: {:?}", line));
        value.parse().unwrap()
    }
}
