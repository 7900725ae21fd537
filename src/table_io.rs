//! Table file format, so expensive simulated tables can be built once and
//! reloaded.
//!
//! ```text
//! Header (11 bytes):
//!   - magic: u32 = 0x45515442 ("EQTB")
//!   - version: u16 = 1
//!   - game: u8 (0 = hold'em, 1 = omaha)
//!   - num_starting: u32
//!
//! Data (little-endian):
//!   - starting hands: [(mask: u64, equity: f64); num_starting]
//!   - percentiles: [[f64; 101]; 4] (preflop, flop, turn, river)
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::Error;
use crate::game::{Game, Street};
use crate::tables::{PercentileTable, StartingHands, TableProvider, Tables, PERCENTILE_POINTS};

const MAGIC: u32 = 0x45515442;
const VERSION: u16 = 1;

pub fn write_tables<W: Write>(tables: &Tables, w: &mut W) -> Result<(), Error> {
    let entries = tables.starting().entries();
    w.write_u32::<LittleEndian>(MAGIC)?;
    w.write_u16::<LittleEndian>(VERSION)?;
    w.write_u8(tables.game().code())?;
    w.write_u32::<LittleEndian>(entries.len() as u32)?;
    for (mask, equity) in entries {
        w.write_u64::<LittleEndian>(mask)?;
        w.write_f64::<LittleEndian>(equity)?;
    }
    for street in Street::ALL {
        for &v in tables.percentile(street).values() {
            w.write_f64::<LittleEndian>(v)?;
        }
    }
    Ok(())
}

pub fn read_tables<R: Read>(r: &mut R) -> Result<Tables, Error> {
    if r.read_u32::<LittleEndian>()? != MAGIC {
        return Err(Error::InvalidMagic);
    }
    let version = r.read_u16::<LittleEndian>()?;
    if version != VERSION {
        return Err(Error::UnsupportedVersion(version));
    }
    let game = Game::from_code(r.read_u8()?)?;
    let n = r.read_u32::<LittleEndian>()? as usize;
    let mut entries = Vec::with_capacity(n.min(1 << 20));
    for _ in 0..n {
        let mask = r.read_u64::<LittleEndian>()?;
        let equity = r.read_f64::<LittleEndian>()?;
        entries.push((mask, equity));
    }
    let starting = StartingHands::new(game, entries)?;

    let mut percentiles = Vec::with_capacity(4);
    let mut values = [0.0; PERCENTILE_POINTS];
    for _ in Street::ALL {
        r.read_f64_into::<LittleEndian>(&mut values)?;
        percentiles.push(PercentileTable::new(&values)?);
    }
    let percentiles: [PercentileTable; 4] = percentiles
        .try_into()
        .map_err(|_| Error::MalformedTable("expected four percentile tables".into()))?;
    Ok(Tables::new(starting, percentiles))
}

impl Tables {
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        log::info!("{:<32}{:<32}", "saving tables", path.display());
        let mut w = BufWriter::new(File::create(path)?);
        write_tables(self, &mut w)?;
        w.flush()?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Tables, Error> {
        log::info!("{:<32}{:<32}", "loading tables", path.display());
        read_tables(&mut BufReader::new(File::open(path)?))
    }
}

/// Provider backed by a file written with [`Tables::save`].
#[derive(Clone, Debug)]
pub struct TableFile {
    pub path: PathBuf,
}

impl TableFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TableProvider for TableFile {
    fn provide(&self, game: Game) -> Result<Tables, Error> {
        let tables = Tables::load(&self.path)?;
        if tables.game() != game {
            return Err(Error::GameMismatch {
                expected: game,
                found: tables.game(),
            });
        }
        Ok(tables)
    }
}
