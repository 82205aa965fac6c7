use graham_solver::{exhaustive_method, rect::Rect};

fn main() {
    let args = std::env::args().collect::<Vec<String>>();
    let m = args.get(1).unwrap().parse::<u32>().unwrap();
    let n = args.get(2).unwrap().parse::<u32>().unwrap();

    let mats = exhaustive_method::enumerate(Rect::new(m, n));
    println!("{} matrices, {} dissections", mats.len(), mats.len() / 2);
    for mat in mats {
        println!("{}", mat);
    }
}
