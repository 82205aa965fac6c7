use graham_solver::solve::{count_dissections, CountRecord};
use indicatif::ProgressBar;

fn main() {
    let args = std::env::args().collect::<Vec<String>>();
    let max_m = args.get(1).unwrap().parse::<u32>().unwrap();
    let max_n = args.get(2).unwrap().parse::<u32>().unwrap();

    let bar = ProgressBar::new(max_m as u64 * max_n as u64);
    let mut records = vec![];
    for m in 1..=max_m {
        for n in 1..=max_n {
            records.push(CountRecord {
                m,
                n,
                count: count_dissections(m as i64, n as i64),
            });
            bar.inc(1);
        }
    }
    bar.finish_and_clear();
    println!("{}", serde_json::to_string_pretty(&records).unwrap());
}
