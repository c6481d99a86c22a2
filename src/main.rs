use anyhow::Result;
use universe::{MeshRecipe, UniverseApp};

fn main() -> Result<()> {
    env_logger::init();

    let mut app = UniverseApp::new()?;
    app.add_object("person", &MeshRecipe::person())?;
    app.add_object("landscape", &MeshRecipe::landscape())?;
    app.run()
}
