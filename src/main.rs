use matrix_codec::{read_dense_matrix, read_sparse_matrix, write_dense_matrix, write_sparse_matrix};
use matrix_codec::{CodecConfig, DuplicatePolicy, SparseMatrixCSC};
use ndarray::array;
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

fn main() -> Result<(), Box<dyn Error>> {
    println!("matrix-codec {}", matrix_codec::VERSION);

    let dense = array![[1.0f64, 2.0, 3.0], [4.0, 5.0, 6.0]];
    let sparse = SparseMatrixCSC::from_triplets(
        3, 3,
        vec![(0, 0, 5.0f64), (1, 2, 3.5)],
        DuplicatePolicy::Sum,
    )?;

    // Both containers share one file, back to back
    let path = std::env::temp_dir().join("matrix_codec_demo.bin");
    {
        let mut writer = BufWriter::new(File::create(&path)?);
        write_dense_matrix(&dense, &mut writer)?;
        write_sparse_matrix(&sparse, &mut writer)?;
        writer.flush()?;
    }

    let config = CodecConfig::default();
    let mut reader = BufReader::new(File::open(&path)?);
    let dense_back = read_dense_matrix::<f64, _>(&mut reader, &config)?;
    let sparse_back = read_sparse_matrix::<f64, _>(&mut reader, &config)?;

    println!("\nWrote {} bytes to {}", std::fs::metadata(&path)?.len(), path.display());
    println!("\nDense matrix:\n{}", dense_back);
    println!("\nSparse matrix:\n{:?}", sparse_back);
    println!("\nRound trip exact: {}", dense_back == dense && sparse_back == sparse);

    std::fs::remove_file(&path)?;
    Ok(())
}
