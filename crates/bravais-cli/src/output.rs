use bravais::core::catalog::descriptor::LatticeTypeDescriptor;
use bravais::core::catalog::kind::CrystalSystem;
use bravais::core::catalog::registry::LatticeCatalog;
use bravais::engine::bundle::RenderBundle;
use nalgebra::{Point3, Vector3};
use std::io::{self, Write};

fn format_vector(v: &Vector3<f64>) -> String {
    format!("({:>10.6}, {:>10.6}, {:>10.6})", v.x, v.y, v.z)
}

fn format_point(p: &Point3<f64>) -> String {
    format!("({:>10.6}, {:>10.6}, {:>10.6})", p.x, p.y, p.z)
}

pub fn write_catalog<W: Write>(out: &mut W, catalog: &LatticeCatalog) -> io::Result<()> {
    let mut current_system: Option<CrystalSystem> = None;
    for descriptor in catalog.iter() {
        let system = descriptor.crystal_system();
        if current_system != Some(system) {
            if current_system.is_some() {
                writeln!(out)?;
            }
            writeln!(out, "{}", system.display_name())?;
            current_system = Some(system);
        }
        writeln!(
            out,
            "  {:<28} {:<28} {} atom(s)",
            descriptor.id(),
            descriptor.name,
            descriptor.atom_positions.len()
        )?;
    }
    Ok(())
}

pub fn write_descriptor<W: Write>(out: &mut W, descriptor: &LatticeTypeDescriptor) -> io::Result<()> {
    writeln!(out, "{} ({})", descriptor.name, descriptor.id())?;
    if !descriptor.description.is_empty() {
        writeln!(out, "{}", descriptor.description)?;
    }
    writeln!(out)?;
    writeln!(out, "Crystal system: {}", descriptor.crystal_system().display_name())?;
    writeln!(out, "Centering:      {}", descriptor.centering().display_name())?;
    if !descriptor.examples.is_empty() {
        writeln!(out, "Examples:       {}", descriptor.examples.join(", "))?;
    }

    writeln!(out)?;
    writeln!(out, "Default parameters:")?;
    for (name, value) in descriptor.default_parameters.iter() {
        writeln!(out, "  {:<6} = {}", name, value)?;
    }

    writeln!(out)?;
    if descriptor.constraints.is_empty() {
        writeln!(out, "Constraints: none")?;
    } else {
        writeln!(out, "Constraints:")?;
        for (name, constraint) in &descriptor.constraints {
            writeln!(out, "  {:<6} {}", name, constraint)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Atom positions (fractional):")?;
    for [x, y, z] in &descriptor.atom_positions {
        writeln!(out, "  ({:.4}, {:.4}, {:.4})", x, y, z)?;
    }
    Ok(())
}

pub fn write_bundle<W: Write>(out: &mut W, bundle: &RenderBundle) -> io::Result<()> {
    let vectors = &bundle.unit_cell_vectors;
    writeln!(out, "Lattice: {}", bundle.lattice)?;
    let parameters: Vec<String> = bundle
        .parameters
        .iter()
        .map(|(name, value)| format!("{} = {}", name, value))
        .collect();
    writeln!(out, "Parameters: {}", parameters.join(", "))?;

    writeln!(out)?;
    writeln!(out, "Basis vectors:")?;
    writeln!(out, "  a = {}", format_vector(&vectors.a))?;
    writeln!(out, "  b = {}", format_vector(&vectors.b))?;
    writeln!(out, "  c = {}", format_vector(&vectors.c))?;
    writeln!(out, "Cell volume: {:.6}", vectors.volume())?;

    writeln!(out)?;
    writeln!(out, "Cell vertices:")?;
    for (index, vertex) in bundle.cell_vertices.iter().enumerate() {
        writeln!(out, "  {} {}", index, format_point(vertex))?;
    }
    let edges: Vec<String> = bundle
        .cell_edges
        .iter()
        .map(|[from, to]| format!("{}-{}", from, to))
        .collect();
    writeln!(out, "Cell edges: {}", edges.join(" "))?;

    writeln!(out)?;
    writeln!(out, "Atoms ({}):", bundle.atoms.len())?;
    for atom in &bundle.atoms {
        writeln!(
            out,
            "  {:<12} {}",
            atom.unit_cell.to_string(),
            format_point(&atom.position)
        )?;
    }
    Ok(())
}

pub fn write_json<W: Write, T: serde::Serialize>(out: &mut W, value: &T) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out).map_err(serde_json::Error::io)
}
