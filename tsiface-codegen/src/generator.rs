//! Generation entry points over a [`TypeGraph`].

use crate::collect::collect_roots;
use crate::config::Config;
use crate::context::Context;
use crate::error::CodegenError;
use crate::typescript;
use std::io::Write;
use std::path::Path;
use tsiface_schema::{Reflect, TypeGraph, TypeGraphBuilder, TypeIndex, TypeRef};

/// Generates TypeScript declarations for records of a built type graph.
///
/// Collection may be repeated with further roots; records already collected
/// are not emitted twice.
#[derive(Debug)]
pub struct Generator<'g> {
    graph: &'g TypeGraph,
    context: Context<TypeRef<'g>>,
}

impl<'g> Generator<'g> {
    /// Creates a generator over `graph`.
    #[must_use]
    pub fn new(graph: &'g TypeGraph, config: Config) -> Self {
        Self {
            graph,
            context: Context::new(config),
        }
    }

    /// Appends a header line emitted before the first declaration.
    pub fn add_custom_header(&mut self, header: impl Into<String>) {
        self.context.add_custom_header(header);
    }

    /// Collects the records reachable from `roots`.
    ///
    /// # Errors
    /// Returns `CodegenError` if an index is not part of the graph, a root is
    /// anonymous, or an unsupported map key is reached. The generator must be
    /// discarded after an error.
    pub fn collect(&mut self, roots: &[TypeIndex]) -> Result<(), CodegenError> {
        let roots = roots
            .iter()
            .map(|&index| self.graph.resolve(index))
            .collect::<Result<Vec<_>, _>>()?;
        collect_roots(&mut self.context, roots)
    }

    /// Renders the declarations collected so far.
    ///
    /// # Errors
    /// Propagates mapping errors.
    pub fn generate(&self) -> Result<String, CodegenError> {
        typescript::emit(&self.context)
    }

    /// Renders into `writer`.
    ///
    /// # Errors
    /// Propagates mapping and I/O errors.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<(), CodegenError> {
        typescript::write_to(&self.context, writer)
    }

    /// Renders into the file at `path`, replacing its contents.
    ///
    /// The file is not touched if rendering fails.
    ///
    /// # Errors
    /// Propagates mapping and I/O errors.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<(), CodegenError> {
        let text = self.generate()?;
        std::fs::write(path.as_ref(), text)?;
        tracing::info!(path = %path.as_ref().display(), "wrote declarations");
        Ok(())
    }

    /// Returns the generation context.
    #[must_use]
    pub fn context(&self) -> &Context<TypeRef<'g>> {
        &self.context
    }
}

/// Collects Rust types implementing [`Reflect`] and generates their
/// declarations in one go.
///
/// # Example
/// ```ignore
/// let ts = Exporter::new(Config::default())
///     .header("// generated")
///     .add::<User>()?
///     .add::<Post>()?
///     .generate()?;
/// ```
#[derive(Debug, Default)]
pub struct Exporter {
    builder: TypeGraphBuilder,
    roots: Vec<TypeIndex>,
    headers: Vec<String>,
    config: Config,
}

impl Exporter {
    /// Creates an exporter.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Appends a header line emitted before the first declaration.
    pub fn header(&mut self, header: impl Into<String>) -> &mut Self {
        self.headers.push(header.into());
        self
    }

    /// Adds `T` as a root.
    ///
    /// # Errors
    /// Returns `CodegenError::Schema` if reflecting `T` fails.
    pub fn add<T: Reflect + ?Sized>(&mut self) -> Result<&mut Self, CodegenError> {
        let index = self.builder.reflect::<T>()?;
        self.roots.push(index);
        Ok(self)
    }

    /// Builds the graph and renders the declarations of every added root.
    ///
    /// # Errors
    /// Returns `CodegenError` if collection or emission fails.
    pub fn generate(&mut self) -> Result<String, CodegenError> {
        let builder = std::mem::take(&mut self.builder);
        let graph = builder.build();
        let mut generator = Generator::new(&graph, self.config.clone());
        for header in &self.headers {
            generator.add_custom_header(header.as_str());
        }
        generator.collect(&self.roots)?;
        let text = generator.generate()?;
        self.roots.clear();
        Ok(text)
    }

    /// Renders into the file at `path`, replacing its contents.
    ///
    /// # Errors
    /// Returns `CodegenError` if generation or writing fails.
    pub fn write_to_path(&mut self, path: impl AsRef<Path>) -> Result<(), CodegenError> {
        let text = self.generate()?;
        std::fs::write(path.as_ref(), text)?;
        tracing::info!(path = %path.as_ref().display(), "wrote declarations");
        Ok(())
    }
}
