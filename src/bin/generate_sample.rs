//! Writes a deterministic demo CSV (an employee survey) for trying out the
//! explorer without hunting for a dataset.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn next_range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64() % (hi - lo)
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const NAMES: [&str; 10] = [
    "Ana", "Bruno", "Carla", "Diego", "Elena", "Fabio", "Gloria", "Hugo", "Irene", "Javier",
];
const GENDERS: [&str; 2] = ["F", "M"];

// (department, mean salary, salary spread)
const DEPARTMENTS: [(&str, f64, f64); 4] = [
    ("Ventas", 28_000.0, 4_000.0),
    ("Ingeniería", 42_000.0, 6_000.0),
    ("Recursos Humanos", 30_000.0, 3_500.0),
    ("Finanzas", 38_000.0, 5_000.0),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "empleados.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer
        .write_record([
            "id",
            "nombre",
            "edad",
            "genero",
            "departamento",
            "salario",
            "satisfacción",
            "fecha",
        ])
        .context("writing header")?;

    let n_rows = 200;
    for id in 0..n_rows {
        let name = NAMES[rng.next_range(0, NAMES.len() as u64) as usize];
        let gender = GENDERS[rng.next_range(0, 2) as usize];
        let age = rng.gauss(38.0, 9.0).clamp(18.0, 65.0).round() as i64;
        let (dept, mean_salary, spread) =
            DEPARTMENTS[rng.next_range(0, DEPARTMENTS.len() as u64) as usize];
        let salary = (rng.gauss(mean_salary, spread) / 100.0).round() * 100.0;
        let satisfaction = rng.next_range(1, 11);
        let month = rng.next_range(1, 13);
        let day = rng.next_range(1, 29);
        let year = rng.next_range(2015, 2025);

        writer
            .write_record([
                id.to_string(),
                name.to_string(),
                age.to_string(),
                gender.to_string(),
                dept.to_string(),
                format!("{salary:.0}"),
                satisfaction.to_string(),
                format!("{year}-{month:02}-{day:02}"),
            ])
            .with_context(|| format!("writing row {id}"))?;
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {n_rows} rows to {output_path}");
    Ok(())
}
