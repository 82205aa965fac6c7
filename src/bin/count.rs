use graham_solver::solve::count_dissections;

fn main() {
    let args = std::env::args().collect::<Vec<String>>();
    let m = args.get(1).unwrap().parse::<i64>().unwrap();
    let n = args.get(2).unwrap().parse::<i64>().unwrap();
    println!("{}", count_dissections(m, n));
}
