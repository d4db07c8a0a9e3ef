//! Cube and action codec bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::{decode, encode, CubeError, CubeRng, Face, Move, RotationDirection};
use crate::cube::{scramble, FaceletGrid};

/// Map engine errors onto Python exceptions.
pub(crate) fn to_py_err(err: CubeError) -> PyErr {
    match err {
        CubeError::OutOfRange { .. } => PyErr::new::<pyo3::exceptions::PyIndexError, _>(err.to_string()),
        _ => PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string()),
    }
}

fn face_from_index(index: usize) -> PyResult<Face> {
    Face::from_index(index).ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Invalid face index {}", index))
    })
}

fn direction_from_index(index: usize) -> PyResult<RotationDirection> {
    RotationDirection::from_index(index).ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("Invalid direction index {}", index))
    })
}

/// Encode a (face, direction) pair of ordinals as an action index.
#[pyfunction]
pub fn encode_action(face: usize, direction: usize) -> PyResult<usize> {
    Ok(encode(face_from_index(face)?, direction_from_index(direction)?))
}

/// Decode an action index into (face, direction) ordinals.
#[pyfunction]
pub fn decode_action(action: usize) -> PyResult<(usize, usize)> {
    let (face, direction) = decode(action).map_err(to_py_err)?;
    Ok((face.index(), direction.index()))
}

/// Python wrapper for FaceletGrid.
#[pyclass(name = "Cube")]
#[derive(Clone, Debug)]
pub struct PyCube(pub FaceletGrid);

#[pymethods]
impl PyCube {
    /// Create a solved cube.
    #[new]
    fn new() -> Self {
        Self(FaceletGrid::solved())
    }

    /// Build a cube from 54 sticker values.
    #[staticmethod]
    fn from_flat(values: Vec<u8>) -> PyResult<Self> {
        FaceletGrid::from_flat(&values).map(Self).map_err(to_py_err)
    }

    /// Reset to the solved state.
    fn initialize_solved(&mut self) {
        self.0.initialize_solved();
    }

    /// Turn a face by ordinal; direction 0 is clockwise, 1 counter-clockwise.
    fn rotate(&mut self, face: usize, direction: usize) -> PyResult<()> {
        self.0.rotate(face_from_index(face)?, direction_from_index(direction)?);
        Ok(())
    }

    /// Apply an action index.
    fn apply_action(&mut self, action: usize) -> PyResult<()> {
        let mv = Move::from_action(action).map_err(to_py_err)?;
        self.0.apply_move(mv);
        Ok(())
    }

    /// Apply a sequence in standard notation, e.g. `"R U R' U'"`.
    fn apply_notation(&mut self, notation: &str) -> PyResult<()> {
        let moves = Move::parse_sequence(notation).map_err(to_py_err)?;
        self.0.apply_moves(&moves);
        Ok(())
    }

    /// Apply `rotation_count` random moves drawn from `seed`.
    fn scramble(&mut self, rotation_count: usize, seed: u64) {
        let mut rng = CubeRng::new(seed);
        scramble(&mut self.0, rotation_count, &mut rng);
    }

    /// Read one sticker.
    fn read(&self, face: usize, row: usize, col: usize) -> PyResult<u8> {
        self.0.read(face_from_index(face)?, row, col).map_err(to_py_err)
    }

    /// True if every face is monochrome.
    fn is_solved(&self) -> bool {
        self.0.is_solved()
    }

    /// Independent copy.
    fn snapshot(&self) -> Self {
        Self(self.0.snapshot())
    }

    /// The 54 sticker values as a flat numpy array.
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_slice_bound(py, &self.0.to_flat())
    }

    /// The 54 sticker values as a list.
    fn to_list(&self) -> Vec<u8> {
        self.0.to_flat().to_vec()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Cube(solved={})", self.0.is_solved())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
