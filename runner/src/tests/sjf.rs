use function_name::named;
use scheduler::Policy;

use super::run;

#[test]
#[named]
pub fn three_jobs() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Policy::Sjf,
        None,
    );
}

#[test]
#[named]
pub fn late_start() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Policy::Sjf,
        None,
    );
}

#[test]
#[named]
pub fn idle_gap() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Policy::Sjf,
        None,
    );
}

#[test]
#[named]
pub fn empty() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Policy::Sjf,
        None,
    );
}
