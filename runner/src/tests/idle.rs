use function_name::named;

use super::run;

#[test]
#[named]
pub fn late_arrival() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &[(3, 2)],
    );
}

#[test]
#[named]
pub fn gap_between_processes() {
    run(
        module_path!().split("::").last().unwrap(),
        function_name!(),
        &[(0, 2), (10, 3), (11, 1)],
    );
}
