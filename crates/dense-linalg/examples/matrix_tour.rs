use anyhow::Result;
use dense_linalg::{add, codec, matmul, matmul_par, scale, Init, Matrix, MatrixConfig};

fn main() -> Result<()> {
    env_logger::init();

    let a = Matrix::from_rows(&[&[1.0, 2.0], &[3.0, 4.0]])?;
    let eye = Matrix::identity(2)?;

    println!("A =\n{}", a);
    println!("A x I =\n{}", matmul(&a, &eye)?);
    println!("A + A =\n{}", add(&a, &a)?);
    println!("0.5 A^T =\n{}", scale(0.5, &a.transpose()));

    let cfg = MatrixConfig::new(64, 64, Init::Uniform { min: -1.0, max: 1.0 }).with_seed(42);
    let r = cfg.build()?;
    let serial = matmul(&r, &r)?;
    let parallel = matmul_par(&r, &r)?;
    println!("serial == parallel: {}", serial == parallel);

    // Round trip through a file in the system temp dir.
    let path = std::env::temp_dir().join("dense_linalg_tour.bin");
    codec::save(&serial, &path)?;
    let loaded = codec::load(&path)?;
    println!(
        "loaded {:?} matrix from {}, identical: {}",
        loaded.shape(),
        path.display(),
        loaded == serial
    );
    std::fs::remove_file(&path)?;

    Ok(())
}
