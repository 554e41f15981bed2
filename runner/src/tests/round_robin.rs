use function_name::named;
use scheduler::Policy;

use super::run;

#[test]
#[named]
pub fn three_jobs() {
    for timeslice in [1, 2] {
        run(
            module_path!().split("::").last().unwrap(),
            function_name!(),
            Policy::RoundRobin,
            Some(timeslice),
        );
    }
}

#[test]
#[named]
pub fn late_start() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Policy::RoundRobin,
        Some(1),
    );
}

#[test]
#[named]
pub fn idle_gap() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Policy::RoundRobin,
        Some(3),
    );
}

#[test]
#[named]
pub fn empty() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        Policy::RoundRobin,
        Some(1),
    );
}
