mod department;
mod district;
mod province;

pub use department::Department;
pub use district::District;
pub use province::Province;
