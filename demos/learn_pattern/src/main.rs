use simple_nn::{matrix::Matrix, neural::Perceptron, random::SeededRandom};

fn main() {
    env_logger::init();

    // Each sample's first column is the target output.
    let inputs = Matrix::from_array([[0, 0, 1], [1, 1, 1], [1, 0, 1], [0, 0, 1]]);
    let targets = Matrix::from_array([[0], [1], [1], [0]]);

    let mut source = SeededRandom::new(42);
    let mut model = Perceptron::create_with(10_000, &mut source).with_log(Some(1_000));

    model.train(&inputs, &targets).unwrap();

    println!("trained weights:");
    println!("{}", model.weights().round(8));

    let probe = Matrix::from_array([[1, 0, 0]]);
    let prediction = model.predict(&probe).unwrap();

    println!("prediction for {probe}:");
    println!("{}", prediction.round(8));
}
